//! Grayscale command
//!
//! Converts an image in place with the luminosity weights and writes it out.

use crate::GrayscaleArgs;
use anyhow::{Context, Result};
use iris_ops::grayscale;
use tracing::{info, trace};

pub fn run(args: GrayscaleArgs, verbose: u8) -> Result<()> {
    trace!(input = %args.input.display(), output = %args.output.display(), "grayscale::run");

    let mut image = super::load_image(&args.input)?;
    info!(image = %super::describe(&image), "Converting to grayscale");

    if verbose > 0 {
        println!("Converting {} ({}) to grayscale", args.input.display(), super::describe(&image));
    }

    grayscale::convert(&mut image).context("Grayscale conversion failed")?;
    super::save_image(&args.output, &image)?;

    if verbose > 0 {
        println!("Done.");
    }

    Ok(())
}
