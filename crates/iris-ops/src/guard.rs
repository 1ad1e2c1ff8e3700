//! Input validation guards for image operations.
//!
//! Every operation validates its inputs here before it reads or writes a
//! single sample, so a failing call leaves the input untouched and
//! allocates no output.
//!
//! # Example
//!
//! ```rust
//! use iris_core::ImageBuffer;
//! use iris_ops::guard::{ensure_radius, ensure_well_formed};
//!
//! let image = ImageBuffer::new(4, 4, 3).unwrap();
//! assert!(ensure_well_formed(&image, "blur").is_ok());
//! assert_eq!(ensure_radius(2).unwrap(), 2);
//! assert!(ensure_radius(0).is_err());
//! ```

use crate::{OpsError, OpsResult};
use iris_core::{Layout, Raster};
use tracing::debug;

/// Validates that an image's samples match its layout.
///
/// [`Layout`] already restricts the channel count to 3 or 4; this also
/// catches [`Raster`] implementations whose storage disagrees with the
/// layout they report.
///
/// # Arguments
///
/// * `image` - The image to validate
/// * `op` - Name of the operation (for diagnostics)
///
/// # Returns
///
/// The validated layout, or `WrongDimensionality` if the sample count is off.
pub fn ensure_well_formed<R: Raster + ?Sized>(image: &R, op: &str) -> OpsResult<Layout> {
    let layout = image.layout();
    if let Err(err) = layout.check_len(image.as_bytes().len()) {
        debug!(op, %err, "rejecting malformed image");
        return Err(err.into());
    }
    Ok(layout)
}

/// Validates a blur radius and converts it to a window half-width.
///
/// Radii beyond `usize::MAX` saturate; the window is clipped to the image
/// anyway.
///
/// # Errors
///
/// [`OpsError::InvalidRadius`] if `radius < 1`.
pub fn ensure_radius(radius: i64) -> OpsResult<usize> {
    if radius < 1 {
        debug!(radius, "rejecting blur radius");
        return Err(OpsError::InvalidRadius { radius });
    }
    Ok(usize::try_from(radius).unwrap_or(usize::MAX))
}
