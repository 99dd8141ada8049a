//! Non-fatal notices produced while resolving a request.

use std::fmt;

use super::MAX_SIZE_PIX;

/// Guidance about an oversized cutout. Never an error: the request is still
/// sent.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolveWarning {
    /// Requested pixel size exceeds the server limit and autoscale is off;
    /// the server will crop the result.
    Truncated {
        size_deg: f64,
        pixscale: f64,
        size_pix: i64,
    },
    /// Pixel scale was coarsened to fit under the server limit.
    Autoscaled {
        size_deg: f64,
        requested_pixscale: f64,
        pixscale: f64,
        size_pix: i64,
    },
}

impl fmt::Display for ResolveWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveWarning::Truncated {
                size_deg, pixscale, ..
            } => write!(
                f,
                "Image size of {:.2} deg with pixel scale {:.3} exceeds server limit of {} pixels! \
                 Image will be truncated! Use --autoscale or pass autoscale=true to automatically \
                 switch pixel scales.",
                size_deg, pixscale, MAX_SIZE_PIX
            ),
            ResolveWarning::Autoscaled {
                size_deg,
                requested_pixscale,
                pixscale,
                size_pix,
            } => write!(
                f,
                "Image size of {:.2} deg with pixel scale {:.3} exceeds server limit of {} pixels! \
                 Automatically adjusting pixel scale to {:.3} giving {} pixels.",
                size_deg, requested_pixscale, MAX_SIZE_PIX, pixscale, size_pix
            ),
        }
    }
}
