//! Image info command.
//!
//! Displays dimensions, channel count and file size.

use crate::InfoArgs;
use anyhow::Result;
use iris_core::Raster;
use std::fs;
use std::path::Path;

/// Runs the info command for every input.
pub fn run(args: InfoArgs, verbose: u8) -> Result<()> {
    for path in &args.input {
        let file_size = fs::metadata(path)?.len();
        let image = super::load_image(path)?;
        print_text(path, &image, file_size, verbose);

        if args.input.len() > 1 {
            println!();
        }
    }

    Ok(())
}

fn print_text<R: Raster>(path: &Path, image: &R, file_size: u64, verbose: u8) {
    println!("{}", path.display());
    println!("  Resolution: {}x{}", image.width(), image.height());
    println!("  Channels:   {}", image.channels());
    println!("  Pixels:     {}", image.layout().pixel_count());
    println!("  File size:  {}", super::format_size(file_size));

    if verbose > 0 {
        println!("  Samples:    {}", image.layout().len());
        println!("  Alpha:      {}", if image.layout().has_alpha() { "yes" } else { "no" });
    }
}
