// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use clap::Parser;
use seamcarve::SeamCarver;
use std::error::Error;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Seam carving for PNG, JPEG and portable anymap images")]
struct Cli {
    /// The image to carve
    input: PathBuf,

    /// Where to write the carved image; the format follows the extension
    output: PathBuf,

    /// Target width in pixels (defaults to the current width)
    #[arg(short = 'W', long)]
    width: Option<u32>,

    /// Target height in pixels (defaults to the current height)
    #[arg(short = 'H', long)]
    height: Option<u32>,

    /// Log every seam removed
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let image = image::open(&cli.input)?.to_rgb8();
    let mut carver = SeamCarver::new(&image)?;
    let (width, height) = (
        cli.width.unwrap_or(carver.width()),
        cli.height.unwrap_or(carver.height()),
    );

    info!(from = ?image.dimensions(), to = ?(width, height), "carving");
    carver.carve(width, height)?;
    carver.picture().save(&cli.output)?;
    Ok(())
}
