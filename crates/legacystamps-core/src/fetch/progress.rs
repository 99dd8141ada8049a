//! Download progress reporting.

/// Receives progress of a single streamed download.
///
/// `start` is called once before the first body bytes with the response's
/// `Content-Length` (when sent), `advance` after each chunk is written, and
/// `finish` once the transfer ends successfully.
pub trait ProgressReporter {
    fn start(&mut self, total_bytes: Option<u64>);
    fn advance(&mut self, bytes: u64);
    fn finish(&mut self);
}

/// Discards progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn start(&mut self, _total_bytes: Option<u64>) {}
    fn advance(&mut self, _bytes: u64) {}
    fn finish(&mut self) {}
}
