//! CLI for fetching Legacy Survey postage stamps.

mod progress;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use legacystamps_core::config;
use legacystamps_core::cutout::{DEFAULT_LAYER, DEFAULT_SIZE_DEG, NATIVE_PIXSCALE};
use legacystamps_core::{fetch_resolved, resolve, CutoutRequest, Mode};
use std::path::PathBuf;

use progress::BarProgress;

/// Image type selection for `--mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// JPEG color composite of the requested bands
    Jpeg,
    /// FITS cube with one plane per band
    Fits,
    /// A JPEG followed by a FITS of the same field
    Both,
}

impl ModeArg {
    pub fn modes(self) -> Vec<Mode> {
        match self {
            ModeArg::Jpeg => vec![Mode::Jpeg],
            ModeArg::Fits => vec![Mode::Fits],
            ModeArg::Both => vec![Mode::Jpeg, Mode::Fits],
        }
    }
}

/// Download postage stamps from the Legacy Survey cutout service.
#[derive(Debug, Parser)]
#[command(name = "legacystamps", version)]
#[command(about = "Download Legacy Survey postage stamps", long_about = None)]
pub struct Cli {
    /// Right ascension of cutout centre in degrees.
    #[arg(long, allow_negative_numbers = true)]
    pub ra: f64,

    /// Declination of cutout centre in degrees.
    #[arg(long, allow_negative_numbers = true)]
    pub dec: f64,

    /// Bands to download, e.g. grz. JPEG gives a colour image, FITS a cube.
    #[arg(long)]
    pub bands: String,

    /// Image type to retrieve.
    #[arg(long, value_enum, default_value = "jpeg")]
    pub mode: ModeArg,

    /// Cutout size in degrees.
    #[arg(long, default_value_t = DEFAULT_SIZE_DEG)]
    pub size: f64,

    /// Layer to make a cutout from, e.g. ls-dr9, sdss or unwise-neo4.
    #[arg(long, default_value = DEFAULT_LAYER)]
    pub layer: String,

    /// Pixel scale in arcsec/pixel.
    #[arg(long, default_value_t = NATIVE_PIXSCALE)]
    pub pixscale: f64,

    /// Coarsen the pixel scale if the image would exceed the server maximum of 3000x3000 pixels.
    #[arg(long)]
    pub autoscale: bool,

    /// Directory to store downloaded files (default: current directory).
    #[arg(long = "download-dir", value_name = "DIR")]
    pub download_dir: Option<PathBuf>,
}

impl Cli {
    /// One request per selected mode.
    pub fn requests(&self) -> Vec<CutoutRequest> {
        self.mode
            .modes()
            .into_iter()
            .map(|mode| {
                let request = CutoutRequest::new(self.ra, self.dec, self.bands.clone())
                    .size(self.size)
                    .mode(mode)
                    .layer(self.layer.clone())
                    .pixscale(self.pixscale)
                    .autoscale(self.autoscale);
                match &self.download_dir {
                    Some(dir) => request.output_dir(dir.clone()),
                    None => request,
                }
            })
            .collect()
    }

    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let ctx = cfg
            .resolve_context()
            .context("cannot determine working directory")?;
        let options = cfg.fetch_options();

        for request in cli.requests() {
            let resolved = resolve(&request, &ctx);
            println!("URL to obtain cutout: {}", resolved.url);
            for warning in &resolved.warnings {
                eprintln!("warning: {}", warning);
            }
            if resolved.used_working_dir {
                println!(
                    "Download directory not specified, downloading to {} instead.",
                    resolved.directory.display()
                );
            }

            let mut progress = BarProgress::new();
            let path = fetch_resolved(&resolved, &options, &mut progress)
                .with_context(|| format!("failed to download {} cutout", request.mode))?;
            println!("Cutout saved to {}.", path.display());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
