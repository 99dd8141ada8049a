//! HTTP retrieval of a resolved URL.
//!
//! Uses the curl crate (libcurl) on the calling thread: a HEAD probe to
//! discover a filename from the `Location` redirect header when needed, and a
//! single streamed GET that writes the body to disk. Failures are logged and
//! returned as [`FetchError`]; nothing is retried.

mod error;
mod filename;
mod progress;
mod stream;

pub use error::{classify_curl_error, ErrorKind, FetchError};
pub use filename::{filename_from_url_path, url_filename};
pub use progress::{NoProgress, ProgressReporter};
pub use stream::download_file;

use std::time::Duration;

/// Default filename when neither the URL path nor a redirect yields one.
pub const DEFAULT_FILENAME: &str = "download.bin";

/// Transfer settings shared by the probe and the download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    /// Limit for establishing the connection.
    pub connect_timeout: Duration,
    /// Limit for the whole transfer.
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            timeout: Duration::from_secs(300),
            user_agent: default_user_agent(),
        }
    }
}

pub fn default_user_agent() -> String {
    format!("legacystamps/{}", env!("CARGO_PKG_VERSION"))
}

impl FetchOptions {
    /// New curl handle for `url` with timeouts and user agent applied.
    pub(crate) fn easy(&self, url: &str) -> Result<curl::easy::Easy, FetchError> {
        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.useragent(&self.user_agent)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;
        Ok(easy)
    }
}
