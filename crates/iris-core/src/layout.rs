//! Pixel addressing for dense, row-major, channel-interleaved images.
//!
//! A [`Layout`] is the validated shape of an image: height, width and a
//! channel count of 3 or 4. It owns the single formula that maps a
//! `(row, col, channel)` coordinate to a linear offset:
//!
//! ```text
//! offset = (row * width + col) * channels + channel
//!
//! Memory: [R G B R G B R G B ...]  <- Row 0
//!         [R G B R G B R G B ...]  <- Row 1
//!         ...
//! ```
//!
//! Every accessor is bounds-checked and returns `None` (or
//! [`Error::OutOfBounds`]) instead of computing an offset that falls outside
//! the buffer.

use crate::{Error, Result};

/// Channel counts accepted by [`Layout`]: RGB and RGBA.
pub const SUPPORTED_CHANNELS: [usize; 2] = [3, 4];

/// Number of color channels read by the filters (R, G, B).
pub const COLOR_CHANNELS: usize = 3;

/// Index of the alpha channel in a 4-channel image.
pub const ALPHA_CHANNEL: usize = 3;

/// Validated shape of an interleaved 8-bit image.
///
/// # Example
///
/// ```rust
/// use iris_core::Layout;
///
/// let layout = Layout::new(2, 3, 4).unwrap();
/// assert_eq!(layout.len(), 24);
/// assert_eq!(layout.offset(1, 2, 3), Some(23));
/// assert_eq!(layout.offset(2, 0, 0), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layout {
    height: usize,
    width: usize,
    channels: usize,
}

impl Layout {
    /// Creates a layout after checking the channel count and that
    /// `height * width * channels` fits in `usize`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidChannelCount`] if `channels` is not 3 or 4.
    /// - [`Error::WrongDimensionality`] if the element count overflows.
    pub fn new(height: usize, width: usize, channels: usize) -> Result<Self> {
        if !SUPPORTED_CHANNELS.contains(&channels) {
            return Err(Error::invalid_channel_count(channels));
        }
        height
            .checked_mul(width)
            .and_then(|n| n.checked_mul(channels))
            .ok_or_else(|| {
                Error::wrong_dimensionality(format!(
                    "{height}x{width}x{channels} is too large to address"
                ))
            })?;
        Ok(Self {
            height,
            width,
            channels,
        })
    }

    /// Creates a layout from a dynamic shape such as a host array reports.
    ///
    /// The shape must be `[height, width, channels]`.
    ///
    /// # Errors
    ///
    /// - [`Error::WrongDimensionality`] if the shape is not 3-dimensional.
    /// - Anything [`Layout::new`] returns.
    ///
    /// # Example
    ///
    /// ```rust
    /// use iris_core::{Error, Layout};
    ///
    /// assert!(Layout::from_shape(&[480, 640, 3]).is_ok());
    /// assert!(matches!(
    ///     Layout::from_shape(&[480, 640]),
    ///     Err(Error::WrongDimensionality { .. })
    /// ));
    /// ```
    pub fn from_shape(shape: &[usize]) -> Result<Self> {
        match *shape {
            [height, width, channels] => Self::new(height, width, channels),
            _ => Err(Error::wrong_dimensionality(format!(
                "expected 3 dimensions (height, width, channels), got {} {:?}",
                shape.len(),
                shape
            ))),
        }
    }

    /// Image height in rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Image width in columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of interleaved channels (3 or 4).
    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Returns `true` for RGBA layouts.
    #[inline]
    pub fn has_alpha(&self) -> bool {
        self.channels == 4
    }

    /// Shape as `[height, width, channels]`.
    #[inline]
    pub fn shape(&self) -> [usize; 3] {
        [self.height, self.width, self.channels]
    }

    /// Number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.height * self.width
    }

    /// Number of `u8` samples (`height * width * channels`).
    #[inline]
    pub fn len(&self) -> usize {
        self.pixel_count() * self.channels
    }

    /// Returns `true` if the image has no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Samples per row.
    #[inline]
    pub fn row_stride(&self) -> usize {
        self.width * self.channels
    }

    /// Returns `true` if `(row, col)` lies inside the image.
    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    /// Offset of the first channel of pixel `(row, col)`.
    #[inline]
    pub fn pixel_offset(&self, row: usize, col: usize) -> Option<usize> {
        self.contains(row, col)
            .then(|| (row * self.width + col) * self.channels)
    }

    /// Offset of `channel` of pixel `(row, col)`.
    #[inline]
    pub fn offset(&self, row: usize, col: usize, channel: usize) -> Option<usize> {
        if channel >= self.channels {
            return None;
        }
        self.pixel_offset(row, col).map(|base| base + channel)
    }

    /// Like [`Layout::offset`] but reports the failing coordinate.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfBounds`] if the coordinate is outside the image.
    pub fn checked_offset(&self, row: usize, col: usize, channel: usize) -> Result<usize> {
        self.offset(row, col, channel).ok_or(Error::OutOfBounds {
            row,
            col,
            channel,
            height: self.height,
            width: self.width,
            channels: self.channels,
        })
    }

    /// Checks that a buffer of `len` samples matches this layout.
    ///
    /// # Errors
    ///
    /// [`Error::WrongDimensionality`] if the length differs.
    pub fn check_len(&self, len: usize) -> Result<()> {
        if len != self.len() {
            return Err(Error::wrong_dimensionality(format!(
                "expected {} samples for {}x{}x{}, got {}",
                self.len(),
                self.height,
                self.width,
                self.channels,
                len
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_are_row_major_interleaved() {
        let layout = Layout::new(3, 5, 3).unwrap();
        assert_eq!(layout.offset(0, 0, 0), Some(0));
        assert_eq!(layout.offset(0, 1, 0), Some(3));
        assert_eq!(layout.offset(1, 0, 0), Some(15));
        assert_eq!(layout.offset(2, 4, 2), Some(44));
        assert_eq!(layout.len(), 45);
        assert_eq!(layout.row_stride(), 15);
    }

    #[test]
    fn test_out_of_range_offsets() {
        let layout = Layout::new(2, 2, 4).unwrap();
        assert_eq!(layout.offset(2, 0, 0), None);
        assert_eq!(layout.offset(0, 2, 0), None);
        assert_eq!(layout.offset(0, 0, 4), None);
        let err = layout.checked_offset(0, 0, 4).unwrap_err();
        assert!(err.is_bounds_error());
    }

    #[test]
    fn test_channel_count_validation() {
        for channels in [0, 1, 2, 5, 16] {
            assert_eq!(
                Layout::new(4, 4, channels),
                Err(Error::InvalidChannelCount { channels })
            );
        }
        assert!(Layout::new(4, 4, 3).is_ok());
        assert!(Layout::new(4, 4, 4).is_ok());
    }

    #[test]
    fn test_from_shape_rank() {
        assert!(matches!(
            Layout::from_shape(&[4, 4]),
            Err(Error::WrongDimensionality { .. })
        ));
        assert!(matches!(
            Layout::from_shape(&[1, 4, 4, 3]),
            Err(Error::WrongDimensionality { .. })
        ));
        assert!(matches!(
            Layout::from_shape(&[4, 4, 1]),
            Err(Error::InvalidChannelCount { channels: 1 })
        ));
        assert_eq!(Layout::from_shape(&[2, 3, 4]).unwrap().shape(), [2, 3, 4]);
    }

    #[test]
    fn test_overflowing_shape() {
        let err = Layout::new(usize::MAX, 2, 3).unwrap_err();
        assert!(matches!(err, Error::WrongDimensionality { .. }));
    }

    #[test]
    fn test_empty_layout() {
        let layout = Layout::new(0, 10, 3).unwrap();
        assert!(layout.is_empty());
        assert_eq!(layout.offset(0, 0, 0), None);
        assert!(layout.check_len(0).is_ok());
        assert!(layout.check_len(1).is_err());
    }
}
