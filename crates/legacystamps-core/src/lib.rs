//! Legacy Survey postage stamp retrieval.
//!
//! [`cutout`] turns sky coordinates and image parameters into a bounded
//! request against the survey's cutout service; [`fetch`] streams the
//! response to disk. [`fetch_cutout`] and [`download`] tie the two together.

pub mod config;
pub mod cutout;
pub mod fetch;
pub mod logging;

mod download;

pub use cutout::{resolve, CutoutRequest, Mode, ResolveContext, ResolveWarning, ResolvedRequest};
pub use download::{download, fetch_cutout, fetch_resolved, SavedCutout};
pub use fetch::{ErrorKind, FetchError, FetchOptions, NoProgress, ProgressReporter};
