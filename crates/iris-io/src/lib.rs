//! # iris-io
//!
//! PNG file I/O for Iris images.
//!
//! Decoded files are normalized to the 8-bit RGB/RGBA layouts the filters
//! accept; see [`png`] for the conversions applied.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use iris_io::{read, write};
//!
//! let image = read("input.png")?;
//! write("output.png", &image)?;
//! # Ok::<(), iris_io::IoError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod png;

pub use error::{IoError, IoResult};
pub use crate::png::{read as read_png, write as write_png};

use iris_core::{ImageBuffer, Raster};
use std::path::Path;

/// Returns `true` if the path has a `.png` extension (any case).
pub fn is_png<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("png"))
}

fn check_format(path: &Path) -> IoResult<()> {
    if is_png(path) {
        return Ok(());
    }
    Err(IoError::UnsupportedFormat(
        path.extension()
            .and_then(|e| e.to_str())
            .unwrap_or("unknown")
            .to_string(),
    ))
}

/// Reads an image, choosing the format from the file extension.
///
/// # Errors
///
/// [`IoError::UnsupportedFormat`] for anything but `.png`.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<ImageBuffer> {
    let path = path.as_ref();
    check_format(path)?;
    png::read(path)
}

/// Writes an image, choosing the format from the file extension.
///
/// # Errors
///
/// [`IoError::UnsupportedFormat`] for anything but `.png`.
pub fn write<P: AsRef<Path>, R: Raster + ?Sized>(path: P, image: &R) -> IoResult<()> {
    let path = path.as_ref();
    check_format(path)?;
    png::write(path, image)
}
