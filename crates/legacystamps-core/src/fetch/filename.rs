//! Filename discovery from a URL or its redirect target.

use std::path::Path;
use std::str;

use super::{FetchError, FetchOptions, DEFAULT_FILENAME};

/// Extracts the last path segment from a URL for use as a filename hint.
///
/// Returns `None` if the URL cannot be parsed or the path is empty/root.
pub fn filename_from_url_path(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path().split('/').filter(|s| !s.is_empty()).last()?;
    if segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}

/// Discovers the filename a download of `url` would naturally be saved as.
///
/// A last path segment with an extension is used directly. Otherwise the URL
/// is probed with HEAD (redirects not followed) and the basename of the
/// `Location` header wins when present; failing both, the bare path segment,
/// or [`DEFAULT_FILENAME`] for an empty path.
pub fn url_filename(url: &str, options: &FetchOptions) -> Result<String, FetchError> {
    let from_path = filename_from_url_path(url);
    if let Some(name) = from_path.as_deref() {
        if Path::new(name).extension().is_some() {
            return Ok(name.to_string());
        }
    }

    let from_location = probe_location(url, options)
        .map_err(FetchError::logged)?
        .and_then(|location| redirect_filename(url, &location));

    Ok(from_location
        .or(from_path)
        .unwrap_or_else(|| DEFAULT_FILENAME.to_string()))
}

/// HEAD `url` without following redirects; returns the `Location` header if any.
fn probe_location(url: &str, options: &FetchOptions) -> Result<Option<String>, FetchError> {
    let mut headers: Vec<String> = Vec::new();

    let mut easy = options.easy(url)?;
    easy.nobody(true)?;
    easy.follow_location(false)?;

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                headers.push(s.trim_end().to_string());
            }
            true
        })?;
        transfer.perform()?;
    }

    tracing::debug!(url, status = easy.response_code().unwrap_or(0), "HEAD probe");
    Ok(location_header(&headers))
}

/// Value of the last `Location` header among collected header lines.
fn location_header(lines: &[String]) -> Option<String> {
    lines
        .iter()
        .filter_map(|line| line.split_once(':'))
        .filter(|(name, _)| name.trim().eq_ignore_ascii_case("location"))
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .last()
}

/// Basename of a redirect target, resolved against the original URL so that
/// relative `Location` values work.
fn redirect_filename(base: &str, location: &str) -> Option<String> {
    let target = url::Url::parse(base).ok()?.join(location).ok()?;
    filename_from_url_path(target.as_str())
}
