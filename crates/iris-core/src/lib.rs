//! # iris-core
//!
//! Core types for Iris image filtering.
//!
//! This crate provides the data model shared by every Iris crate:
//!
//! - [`Layout`] - Validated height x width x channels shape and the
//!   bounds-checked `(row, col, channel) -> offset` mapping
//! - [`ImageBuffer`] - Owned, dense, row-major, channel-interleaved 8-bit image
//! - [`ImageView`], [`ImageViewMut`] - Borrowed images over caller memory
//! - [`Raster`], [`RasterMut`] - Read/write access the filters are written against
//! - [`Error`] - Shape and bounds errors
//!
//! ## Invariants
//!
//! Only RGB (3 channels) and RGBA (4 channels) images can be constructed,
//! and the sample count always equals `height * width * channels`. The
//! filters in `iris-ops` rely on both.
//!
//! ## Crate Structure
//!
//! ```text
//! iris-core (this crate)
//!    ^
//!    |
//!    +-- iris-ops (grayscale, box blur)
//!    +-- iris-io (PNG read/write)
//!    +-- iris-cli, iris-py (front ends)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod image;
pub mod layout;

pub use error::{Error, Result};
pub use image::{ImageBuffer, ImageView, ImageViewMut, Raster, RasterMut};
pub use layout::{Layout, ALPHA_CHANNEL, COLOR_CHANNELS, SUPPORTED_CHANNELS};

/// Prelude module for convenient imports.
///
/// ```
/// use iris_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::image::{ImageBuffer, ImageView, ImageViewMut, Raster, RasterMut};
    pub use crate::layout::Layout;
}
