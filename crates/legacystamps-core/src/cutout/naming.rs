//! Query URL and local filename for a resolved cutout.
//!
//! Coordinates render with six decimals (`{:.6}`) in both the URL and the
//! filename, e.g. `154.7709` becomes `154.770900`.

use super::Mode;

/// Builds the cutout query URL.
///
/// `service_url` is the scheme and host (a trailing `/` is ignored); the rest
/// follows the viewer's fixed template. `pixscale` renders with three
/// decimals.
pub fn cutout_url(
    service_url: &str,
    mode: Mode,
    ra: f64,
    dec: f64,
    layer: &str,
    pixscale: f64,
    bands: &str,
    size_pix: i64,
) -> String {
    format!(
        "{}/viewer/{}-cutout/?ra={:.6}&dec={:.6}&layer={}&pixscale={:.3}&bands={}&size={}",
        service_url.trim_end_matches('/'),
        mode,
        ra,
        dec,
        layer,
        pixscale,
        bands,
        size_pix
    )
}

/// File name (no directory) for a cutout: `legacystamps_{ra}_{dec}_{layer}.{mode}`.
pub fn cutout_filename(ra: f64, dec: f64, layer: &str, mode: Mode) -> String {
    format!("legacystamps_{:.6}_{:.6}_{}.{}", ra, dec, layer, mode)
}
