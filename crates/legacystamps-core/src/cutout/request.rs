//! Cutout request model.

use std::fmt;
use std::path::PathBuf;

use super::{DEFAULT_LAYER, DEFAULT_SIZE_DEG, NATIVE_PIXSCALE};

/// Image product requested from the service.
///
/// Selects the endpoint (`jpeg-cutout` / `fits-cutout`) and the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Color composite of the requested bands.
    #[default]
    Jpeg,
    /// Data cube with one plane per band.
    Fits,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Jpeg => "jpeg",
            Mode::Fits => "fits",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One postage stamp to fetch.
///
/// Coordinates and sizes are forwarded to the service as given; nothing is
/// range-checked here.
#[derive(Debug, Clone, PartialEq)]
pub struct CutoutRequest {
    /// Right ascension of the cutout center, degrees.
    pub ra: f64,
    /// Declination of the cutout center, degrees.
    pub dec: f64,
    /// Edge length of the square cutout, degrees.
    pub size: f64,
    /// Band identifiers, e.g. `"grz"`.
    pub bands: String,
    pub mode: Mode,
    /// Survey data release, e.g. `"ls-dr9"`.
    pub layer: String,
    /// Requested pixel scale, arcsec/pixel.
    pub pixscale: f64,
    /// Coarsen the pixel scale instead of letting the server truncate.
    pub autoscale: bool,
    /// Directory for the saved file; the working directory when `None`.
    pub output_dir: Option<PathBuf>,
}

impl CutoutRequest {
    /// New request centered on (`ra`, `dec`) with the default size, mode,
    /// layer and pixel scale.
    pub fn new(ra: f64, dec: f64, bands: impl Into<String>) -> Self {
        Self {
            ra,
            dec,
            size: DEFAULT_SIZE_DEG,
            bands: bands.into(),
            mode: Mode::default(),
            layer: DEFAULT_LAYER.to_string(),
            pixscale: NATIVE_PIXSCALE,
            autoscale: false,
            output_dir: None,
        }
    }

    pub fn size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn layer(mut self, layer: impl Into<String>) -> Self {
        self.layer = layer.into();
        self
    }

    pub fn pixscale(mut self, pixscale: f64) -> Self {
        self.pixscale = pixscale;
        self
    }

    pub fn autoscale(mut self, autoscale: bool) -> Self {
        self.autoscale = autoscale;
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }
}
