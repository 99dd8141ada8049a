//! Pixel-limit policy and request resolution.

use std::path::PathBuf;

use super::naming::{cutout_filename, cutout_url};
use super::{CutoutRequest, ResolveWarning, DEFAULT_SERVICE_URL, MAX_SIZE_PIX, NATIVE_PIXSCALE};

/// Environment facts the resolver needs, passed in so resolution stays pure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveContext {
    /// Scheme and host of the cutout service.
    pub service_url: String,
    /// Directory used when the request names none.
    pub working_dir: PathBuf,
}

impl ResolveContext {
    pub fn new(service_url: impl Into<String>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            service_url: service_url.into(),
            working_dir: working_dir.into(),
        }
    }

    /// Public service, relative to `working_dir`.
    pub fn public(working_dir: impl Into<PathBuf>) -> Self {
        Self::new(DEFAULT_SERVICE_URL, working_dir)
    }
}

/// A request ready to send: final URL, destination and any guidance.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRequest {
    pub url: String,
    /// Directory the file is saved in.
    pub directory: PathBuf,
    /// File name within `directory`.
    pub filename: String,
    /// Pixel scale actually requested.
    pub pixscale: f64,
    /// Pixel edge length actually requested.
    pub size_pix: i64,
    pub warnings: Vec<ResolveWarning>,
    /// True when the request named no directory and the context's working
    /// directory was used.
    pub used_working_dir: bool,
}

impl ResolvedRequest {
    /// Full destination path.
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.filename)
    }
}

/// Cutout edge in pixels for `size_deg` degrees at `pixscale` arcsec/pixel.
///
/// Truncates toward zero. Non-positive inputs give degenerate values (zero,
/// negative, or saturated for a zero pixel scale) and are not rejected.
pub fn size_in_pixels(size_deg: f64, pixscale: f64) -> i64 {
    (size_deg * 3600.0 / pixscale) as i64
}

/// Step counts above this are skipped ahead in one multiplication.
const STEP_SKIP_THRESHOLD: f64 = 1024.0;

/// Smallest `pixscale + k * NATIVE_PIXSCALE` (k >= 1) that fits, with its
/// pixel size, or `None` when no representable step fits.
fn autoscale_pixscale(size_deg: f64, pixscale: f64) -> Option<(f64, i64)> {
    if !size_deg.is_finite() {
        return None;
    }

    // Stay one step short of the smallest scale that could fit, so the
    // remaining additions still land on the first step that does.
    let threshold = size_deg * 3600.0 / (MAX_SIZE_PIX + 1) as f64;
    let skip = ((threshold - pixscale) / NATIVE_PIXSCALE).floor() - 1.0;
    let mut current = if skip.is_finite() && skip > STEP_SKIP_THRESHOLD {
        pixscale + skip * NATIVE_PIXSCALE
    } else {
        pixscale
    };

    loop {
        let next = current + NATIVE_PIXSCALE;
        if next == current {
            return None;
        }
        current = next;
        let size_pix = size_in_pixels(size_deg, current);
        if size_pix <= MAX_SIZE_PIX {
            return Some((current, size_pix));
        }
    }
}

/// Resolves `request` into the URL and destination to fetch.
///
/// Cutouts wider than [`MAX_SIZE_PIX`] are either left as requested with a
/// [`ResolveWarning::Truncated`], or, with `autoscale`, the pixel scale is
/// raised in steps of [`NATIVE_PIXSCALE`] until the cutout fits, with a
/// [`ResolveWarning::Autoscaled`]. The chosen scale is the smallest step
/// count that fits. A size no step can bring under the limit (non-finite, or
/// so large that adding a step no longer changes the scale) is left as
/// requested and reported as truncated.
pub fn resolve(request: &CutoutRequest, ctx: &ResolveContext) -> ResolvedRequest {
    let mut warnings = Vec::new();
    let mut pixscale = request.pixscale;
    let mut size_pix = size_in_pixels(request.size, pixscale);

    if size_pix > MAX_SIZE_PIX {
        let fitted = if request.autoscale {
            autoscale_pixscale(request.size, request.pixscale)
        } else {
            None
        };
        if let Some((scaled, scaled_pix)) = fitted {
            pixscale = scaled;
            size_pix = scaled_pix;
            tracing::debug!(
                requested = request.pixscale,
                pixscale,
                size_pix,
                "autoscaled cutout pixel scale"
            );
            warnings.push(ResolveWarning::Autoscaled {
                size_deg: request.size,
                requested_pixscale: request.pixscale,
                pixscale,
                size_pix,
            });
        } else {
            if request.autoscale {
                tracing::debug!(size_deg = request.size, "no pixel scale step fits; left as requested");
            }
            warnings.push(ResolveWarning::Truncated {
                size_deg: request.size,
                pixscale,
                size_pix,
            });
        }
    }

    let url = cutout_url(
        &ctx.service_url,
        request.mode,
        request.ra,
        request.dec,
        &request.layer,
        pixscale,
        &request.bands,
        size_pix,
    );
    let filename = cutout_filename(request.ra, request.dec, &request.layer, request.mode);
    let (directory, used_working_dir) = match request.output_dir.as_deref() {
        Some(dir) => (dir.to_path_buf(), false),
        None => (ctx.working_dir.clone(), true),
    };

    ResolvedRequest {
        url,
        directory,
        filename,
        pixscale,
        size_pix,
        warnings,
        used_working_dir,
    }
}
