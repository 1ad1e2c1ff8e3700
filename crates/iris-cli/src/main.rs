//! iris - grayscale conversion and box blur for PNG images

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use iris_ops::{BlurMethod, DEFAULT_RADIUS};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "iris")]
#[command(author, version, about = "Grayscale conversion and box blur for PNG images")]
#[command(long_about = "
Applies simple filters to 8-bit RGB/RGBA PNG images.
Grayscale and grayscale+alpha inputs are expanded to RGB/RGBA on load.

Examples:
  iris info photo.png                       # Show dimensions and channels
  iris grayscale photo.png -o gray.png      # Luminosity grayscale
  iris blur photo.png -o soft.png -r 3      # Box blur, radius 3
  iris -vv blur photo.png -o soft.png --method naive
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Display image dimensions and channel count
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Convert to grayscale (luminosity method); alpha is kept
    #[command(visible_alias = "gray")]
    Grayscale(GrayscaleArgs),

    /// Apply box blur
    Blur(BlurArgs),
}

#[derive(Args)]
struct InfoArgs {
    /// Input image(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,
}

#[derive(Args)]
struct GrayscaleArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,
}

#[derive(Args)]
struct BlurArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Blur radius in pixels (at least 1)
    #[arg(short, long, default_value_t = DEFAULT_RADIUS, allow_negative_numbers = true)]
    radius: i64,

    /// Window sum method: naive, summed-area
    #[arg(short, long, default_value_t = BlurMethod::default())]
    method: BlurMethod,
}

/// Log level implied by the verbosity flag when `RUST_LOG` is unset.
fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Info(args) => commands::info::run(args, cli.verbose),
        Commands::Grayscale(args) => commands::grayscale::run(args, cli.verbose),
        Commands::Blur(args) => commands::blur::run(args, cli.verbose),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_blur_defaults() {
        let cli = Cli::try_parse_from(["iris", "blur", "in.png", "-o", "out.png"]).unwrap();
        let Commands::Blur(args) = cli.command else {
            panic!("expected blur");
        };
        assert_eq!(args.radius, 1);
        assert_eq!(args.method, BlurMethod::SummedArea);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_blur_options() {
        let cli = Cli::try_parse_from([
            "iris", "-vv", "blur", "in.png", "-o", "out.png", "-r", "4", "--method", "naive",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Commands::Blur(args) = cli.command else {
            panic!("expected blur");
        };
        assert_eq!(args.radius, 4);
        assert_eq!(args.method, BlurMethod::Naive);
    }

    #[test]
    fn test_bad_method_rejected() {
        let res = Cli::try_parse_from(["iris", "blur", "a.png", "-o", "b.png", "--method", "gauss"]);
        assert!(res.is_err());
    }

    #[test]
    fn test_negative_radius_parses() {
        // Rejected later by the filter with a descriptive error.
        let cli = Cli::try_parse_from(["iris", "blur", "a.png", "-o", "b.png", "-r", "-2"]).unwrap();
        let Commands::Blur(args) = cli.command else {
            panic!("expected blur");
        };
        assert_eq!(args.radius, -2);
    }

    #[test]
    fn test_default_level() {
        assert_eq!(default_level(0), "warn");
        assert_eq!(default_level(1), "info");
        assert_eq!(default_level(2), "debug");
        assert_eq!(default_level(9), "trace");
    }
}
