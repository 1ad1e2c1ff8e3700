//! Error types for iris-core operations.
//!
//! Every image buffer and view is validated when it is constructed, so the
//! errors here are raised at the boundary where raw data becomes an image.
//!
//! # Usage
//!
//! ```rust
//! use iris_core::{Error, Layout};
//!
//! let err = Layout::new(2, 2, 2).unwrap_err();
//! assert!(matches!(err, Error::InvalidChannelCount { channels: 2 }));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::layout::Layout`] - Shape validation and bounds checking
//! - [`crate::image`] - Buffer and view construction
//! - `iris-ops` - Wrapped in `OpsError`
//! - `iris-io` - Wrapped in `IoError`

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or addressing an image.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The data is not organized as height x width x channels.
    ///
    /// Returned when a shape does not have exactly three dimensions, when
    /// the data length does not match the shape, or when the shape is too
    /// large to address.
    #[error("wrong dimensionality: {reason}")]
    WrongDimensionality {
        /// What was wrong with the shape
        reason: String,
    },

    /// The channel count is not 3 (RGB) or 4 (RGBA).
    #[error("invalid channel count {channels}: expected 3 (RGB) or 4 (RGBA)")]
    InvalidChannelCount {
        /// Channel count that was supplied
        channels: usize,
    },

    /// A (row, col, channel) coordinate lies outside the image.
    #[error(
        "sample ({row}, {col}, {channel}) out of bounds for image {height}x{width}x{channels}"
    )]
    OutOfBounds {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Requested channel
        channel: usize,
        /// Image height
        height: usize,
        /// Image width
        width: usize,
        /// Image channel count
        channels: usize,
    },
}

impl Error {
    /// Creates an [`Error::WrongDimensionality`] error.
    #[inline]
    pub fn wrong_dimensionality(reason: impl Into<String>) -> Self {
        Self::WrongDimensionality {
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::InvalidChannelCount`] error.
    #[inline]
    pub fn invalid_channel_count(channels: usize) -> Self {
        Self::InvalidChannelCount { channels }
    }

    /// Returns `true` if this is a shape-related error.
    #[inline]
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            Self::WrongDimensionality { .. } | Self::InvalidChannelCount { .. }
        )
    }

    /// Returns `true` if this is a bounds-related error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}
