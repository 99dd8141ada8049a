//! Terminal progress bar for a single download.

use indicatif::{ProgressBar, ProgressStyle};
use legacystamps_core::ProgressReporter;

const BAR_TEMPLATE: &str = "{bar:40.cyan/blue} {bytes}/{total_bytes} ({bytes_per_sec}, {eta})";
const SPINNER_TEMPLATE: &str = "{spinner} {bytes} ({bytes_per_sec})";

/// Bar sized from `Content-Length`, or a spinner when the length is unknown.
#[derive(Default)]
pub struct BarProgress {
    bar: Option<ProgressBar>,
}

impl BarProgress {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressReporter for BarProgress {
    fn start(&mut self, total_bytes: Option<u64>) {
        let bar = match total_bytes {
            Some(len) => {
                let bar = ProgressBar::new(len);
                let style = ProgressStyle::with_template(BAR_TEMPLATE)
                    .unwrap_or_else(|_| ProgressStyle::default_bar());
                bar.set_style(style.progress_chars("=> "));
                bar
            }
            None => {
                let bar = ProgressBar::new_spinner();
                let style = ProgressStyle::with_template(SPINNER_TEMPLATE)
                    .unwrap_or_else(|_| ProgressStyle::default_spinner());
                bar.set_style(style);
                bar
            }
        };
        self.bar = Some(bar);
    }

    fn advance(&mut self, bytes: u64) {
        if let Some(bar) = &self.bar {
            bar.inc(bytes);
        }
    }

    fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish();
        }
    }
}

impl Drop for BarProgress {
    fn drop(&mut self) {
        // Failed transfer: leave the bar where it stopped.
        if let Some(bar) = self.bar.take() {
            bar.abandon();
        }
    }
}
