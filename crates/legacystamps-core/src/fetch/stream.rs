//! Single-stream HTTP GET to a local file.
//!
//! The destination is opened when the first body bytes of a successful
//! response arrive, so a refused connection or an HTTP error status leaves no
//! file behind. A transfer that fails midway leaves the partial file in place;
//! it is not removed.

use std::cell::Cell;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str;

use super::filename::url_filename;
use super::{FetchError, FetchOptions, ProgressReporter};

const WRITE_BUFFER: usize = 64 * 1024;

/// Streams `url` to disk and returns the path written.
///
/// The destination is `filename` when given (joined onto `target_dir` if it is
/// relative), otherwise the name discovered by [`url_filename`] inside
/// `target_dir` or the working directory. `target_dir`, when given, must be an
/// existing directory.
pub fn download_file(
    url: &str,
    filename: Option<&Path>,
    target_dir: Option<&Path>,
    options: &FetchOptions,
    progress: &mut dyn ProgressReporter,
) -> Result<PathBuf, FetchError> {
    if let Some(dir) = target_dir {
        if !dir.is_dir() {
            return Err(FetchError::InvalidOutputDirectory(dir.to_path_buf()).logged());
        }
    }

    let destination = match (filename, target_dir) {
        (Some(name), Some(dir)) if name.is_relative() => dir.join(name),
        (Some(name), _) => name.to_path_buf(),
        (None, dir) => {
            let name = url_filename(url, options)?;
            match dir {
                Some(dir) => dir.join(name),
                None => std::env::current_dir()
                    .map_err(|e| FetchError::Storage(e).logged())?
                    .join(name),
            }
        }
    };

    let written = stream_to_path(url, &destination, options, progress).map_err(FetchError::logged)?;
    tracing::info!(url, path = %destination.display(), bytes = written, "download complete");
    Ok(destination)
}

/// GET `url` and write the body to `destination`. Returns bytes written.
fn stream_to_path(
    url: &str,
    destination: &Path,
    options: &FetchOptions,
    progress: &mut dyn ProgressReporter,
) -> Result<u64, FetchError> {
    let content_length: Cell<Option<u64>> = Cell::new(None);
    let mut writer: Option<BufWriter<File>> = None;
    let mut write_error: Option<io::Error> = None;
    let mut written = 0u64;
    let mut started = false;

    let mut easy = options.easy(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    // Error statuses fail the transfer before any body is delivered.
    easy.fail_on_error(true)?;

    let perform_result = {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(line) = str::from_utf8(data) {
                if line.starts_with("HTTP/") {
                    // New response after a redirect.
                    content_length.set(None);
                } else if let Some(len) = parse_content_length(line) {
                    content_length.set(Some(len));
                }
            }
            true
        })?;
        transfer.write_function(|data| {
            if !started {
                progress.start(content_length.get());
                started = true;
            }
            if writer.is_none() {
                match File::create(destination) {
                    Ok(file) => writer = Some(BufWriter::with_capacity(WRITE_BUFFER, file)),
                    Err(e) => {
                        write_error = Some(e);
                        return Ok(0); // abort transfer
                    }
                }
            }
            let Some(out) = writer.as_mut() else {
                return Ok(0);
            };
            match out.write_all(data) {
                Ok(()) => {
                    written += data.len() as u64;
                    progress.advance(data.len() as u64);
                    Ok(data.len())
                }
                Err(e) => {
                    write_error = Some(e);
                    Ok(0)
                }
            }
        })?;
        transfer.perform()
    };

    if let Err(e) = perform_result {
        if e.is_write_error() {
            if let Some(io_err) = write_error.take() {
                return Err(FetchError::Storage(io_err));
            }
        }
        if e.is_http_returned_error() {
            let status = easy.response_code()?;
            return Err(FetchError::Http {
                status,
                url: url.to_string(),
            });
        }
        return Err(e.into());
    }

    let status = easy.response_code()?;
    if !(200..300).contains(&status) {
        return Err(FetchError::Http {
            status,
            url: url.to_string(),
        });
    }

    match writer {
        Some(mut out) => out.flush().map_err(FetchError::Storage)?,
        // Successful response with an empty body.
        None => {
            progress.start(content_length.get());
            File::create(destination).map_err(FetchError::Storage)?;
        }
    }
    progress.finish();

    Ok(written)
}

/// `Content-Length` value from a single header line, if that is what it is.
fn parse_content_length(line: &str) -> Option<u64> {
    let (name, value) = line.split_once(':')?;
    if !name.trim().eq_ignore_ascii_case("content-length") {
        return None;
    }
    value.trim().parse().ok()
}
