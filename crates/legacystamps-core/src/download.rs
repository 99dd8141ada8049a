//! Resolve-then-fetch entry points.

use std::path::{Path, PathBuf};

use crate::config::StampsConfig;
use crate::cutout::{resolve, CutoutRequest, ResolvedRequest};
use crate::fetch::{self, FetchError, FetchOptions, NoProgress, ProgressReporter};

/// A cutout written to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedCutout {
    pub path: PathBuf,
    pub resolved: ResolvedRequest,
}

/// Streams an already resolved request to its destination.
///
/// Warnings on `resolved` are logged here; printing them is up to the caller.
pub fn fetch_resolved(
    resolved: &ResolvedRequest,
    options: &FetchOptions,
    progress: &mut dyn ProgressReporter,
) -> Result<PathBuf, FetchError> {
    tracing::info!(url = %resolved.url, "URL to obtain cutout");
    for warning in &resolved.warnings {
        tracing::warn!("{}", warning);
    }
    if resolved.used_working_dir {
        tracing::info!(
            "download directory not specified, downloading to {} instead",
            resolved.directory.display()
        );
    }

    fetch::download_file(
        &resolved.url,
        Some(Path::new(&resolved.filename)),
        Some(&resolved.directory),
        options,
        progress,
    )
}

/// Resolves `request` against `config` and downloads it.
pub fn fetch_cutout(
    request: &CutoutRequest,
    config: &StampsConfig,
    progress: &mut dyn ProgressReporter,
) -> Result<SavedCutout, FetchError> {
    let ctx = config
        .resolve_context()
        .map_err(|e| FetchError::Storage(e).logged())?;
    let resolved = resolve(request, &ctx);
    let path = fetch_resolved(&resolved, &config.fetch_options(), progress)?;
    tracing::info!("cutout saved to {}", path.display());
    Ok(SavedCutout { path, resolved })
}

/// Downloads `request` from the public service with default settings and
/// returns the saved filename.
pub fn download(request: &CutoutRequest) -> Result<String, FetchError> {
    let saved = fetch_cutout(request, &StampsConfig::default(), &mut NoProgress)?;
    Ok(saved.path.to_string_lossy().into_owned())
}
