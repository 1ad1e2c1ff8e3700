//! Blur command
//!
//! Applies a box blur with a shrinking border window.

use crate::BlurArgs;
use anyhow::{Context, Result};
use iris_ops::BoxBlur;
use tracing::{info, trace};

pub fn run(args: BlurArgs, verbose: u8) -> Result<()> {
    trace!(input = %args.input.display(), radius = args.radius, method = %args.method, "blur::run");

    let blur = BoxBlur::new(args.radius)
        .context("Invalid blur settings")?
        .with_method(args.method);
    let image = super::load_image(&args.input)?;

    info!(radius = blur.radius(), method = %blur.method(), image = %super::describe(&image), "Applying blur");

    if verbose > 0 {
        println!(
            "Applying box blur (radius={}, method={}) to {}",
            blur.radius(),
            blur.method(),
            args.input.display()
        );
    }

    let output = blur.apply(&image).context("Blur failed")?;
    super::save_image(&args.output, &output)?;

    if verbose > 0 {
        println!("Done.");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use iris_core::{ImageBuffer, Raster};
    use iris_ops::BlurMethod;
    use std::path::PathBuf;

    fn args(input: PathBuf, output: PathBuf, radius: i64) -> BlurArgs {
        BlurArgs {
            input,
            output,
            radius,
            method: BlurMethod::Naive,
        }
    }

    #[test]
    fn test_run_blurs_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.png");
        let output = dir.path().join("out.png");
        let src = ImageBuffer::from_raw(2, 2, 3, vec![255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255])
            .unwrap();
        iris_io::write(&input, &src).unwrap();

        run(args(input, output.clone(), 1), 0).unwrap();

        let out = iris_io::read(&output).unwrap();
        assert!(out.pixels().all(|p| p == [127, 127, 127]));
    }

    #[test]
    fn test_invalid_radius_fails_before_io() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.png");
        let err = run(args(dir.path().join("missing.png"), output.clone(), 0), 0).unwrap_err();
        assert!(format!("{err:#}").contains("invalid radius 0"));
        assert!(!output.exists());
    }
}
