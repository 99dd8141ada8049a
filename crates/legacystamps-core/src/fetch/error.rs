//! Fetch error type and curl error classification.

use std::path::PathBuf;

/// Failure kind, for callers that branch without matching on payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Target directory does not exist or is not a directory.
    InvalidOutputDirectory,
    /// Server answered with a non-2xx status.
    Http,
    /// Network-level failure (refused, DNS, reset).
    Connection,
    /// Connect or transfer time limit hit.
    Timeout,
    /// Any other request failure.
    Request,
    /// Local file could not be created or written.
    Storage,
}

/// Error returned by filename discovery and downloads.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("invalid output directory: {}", .0.display())]
    InvalidOutputDirectory(PathBuf),

    #[error("GET {url} returned HTTP {status}")]
    Http { status: u32, url: String },

    #[error("connection failed: {0}")]
    Connection(#[source] curl::Error),

    #[error("request timed out: {0}")]
    Timeout(#[source] curl::Error),

    #[error("request failed: {0}")]
    Request(#[source] curl::Error),

    #[error("storage: {0}")]
    Storage(#[source] std::io::Error),
}

impl FetchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::InvalidOutputDirectory(_) => ErrorKind::InvalidOutputDirectory,
            FetchError::Http { .. } => ErrorKind::Http,
            FetchError::Connection(_) => ErrorKind::Connection,
            FetchError::Timeout(_) => ErrorKind::Timeout,
            FetchError::Request(_) => ErrorKind::Request,
            FetchError::Storage(_) => ErrorKind::Storage,
        }
    }

    /// Logs the error and hands it back, for use on the way out of a call.
    pub(crate) fn logged(self) -> Self {
        tracing::error!(kind = ?self.kind(), "{}", self);
        self
    }
}

impl From<curl::Error> for FetchError {
    fn from(e: curl::Error) -> Self {
        match classify_curl_error(&e) {
            ErrorKind::Timeout => FetchError::Timeout(e),
            ErrorKind::Connection => FetchError::Connection(e),
            _ => FetchError::Request(e),
        }
    }
}

/// Classify a curl error into timeout, connection, or generic request failure.
pub fn classify_curl_error(e: &curl::Error) -> ErrorKind {
    if e.is_operation_timedout() {
        return ErrorKind::Timeout;
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_ssl_connect_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
        || e.is_partial_file()
    {
        return ErrorKind::Connection;
    }
    ErrorKind::Request
}
