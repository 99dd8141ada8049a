//! Cutout request resolution.
//!
//! Turns center coordinates, angular size, pixel scale, layer, bands and
//! image mode into a request the survey service accepts: the pixel size is
//! kept under the server limit (or a warning is produced), the query URL is
//! built from the service template and the local filename is derived.
//! Everything here is pure; no network or filesystem access.

mod naming;
mod request;
mod resolve;
mod warning;

pub use naming::{cutout_filename, cutout_url};
pub use request::{CutoutRequest, Mode};
pub use resolve::{resolve, size_in_pixels, ResolveContext, ResolvedRequest};
pub use warning::ResolveWarning;

/// Largest cutout edge, in pixels, the service renders without truncating.
pub const MAX_SIZE_PIX: i64 = 3000;

/// Native pixel scale of the survey in arcsec/pixel; also the autoscale step.
pub const NATIVE_PIXSCALE: f64 = 0.262;

/// Public Legacy Survey viewer host.
pub const DEFAULT_SERVICE_URL: &str = "https://www.legacysurvey.org";

/// Layer used when none is given.
pub const DEFAULT_LAYER: &str = "ls-dr9";

/// Cutout edge in degrees used when none is given.
pub const DEFAULT_SIZE_DEG: f64 = 0.01;
