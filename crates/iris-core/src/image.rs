//! Image buffer types.
//!
//! This module provides the image containers the filters operate on:
//! - [`ImageBuffer`] - Owned, contiguous 8-bit image
//! - [`ImageView`] - Immutable borrowed image over a caller slice
//! - [`ImageViewMut`] - Mutable borrowed image over a caller slice
//!
//! All three carry a validated [`Layout`], so a value of any of these types
//! is always a well-formed height x width x channels image with 3 or 4
//! channels and exactly `height * width * channels` samples.
//!
//! Shared read access goes through the [`Raster`] trait and write access
//! through [`RasterMut`], which is what the filters in `iris-ops` accept.
//!
//! # Usage
//!
//! ```rust
//! use iris_core::{ImageBuffer, Raster, RasterMut};
//!
//! let mut img = ImageBuffer::new(2, 2, 3).unwrap();
//! img.set(1, 0, 2, 255).unwrap();
//!
//! assert_eq!(img.get(1, 0, 2), Some(255));
//! assert_eq!(img.pixel(1, 0), Some(&[0, 0, 255][..]));
//! ```
//!
//! # Views
//!
//! Views wrap memory owned by someone else, e.g. a host array, without
//! copying:
//!
//! ```rust
//! use iris_core::{ImageViewMut, Raster, RasterMut};
//!
//! let mut samples = vec![0u8; 4 * 4 * 4];
//! let mut view = ImageViewMut::from_shape(&[4, 4, 4], &mut samples).unwrap();
//! view.set(0, 0, 3, 128).unwrap();
//! assert_eq!(samples[3], 128);
//! ```

use crate::{Error, Layout, Result};
use std::slice::{ChunksExact, ChunksExactMut};

/// Read access to a dense, row-major, channel-interleaved 8-bit image.
///
/// Implementors guarantee that [`Raster::as_bytes`] returns exactly
/// `layout().len()` samples laid out as described by [`Layout`].
pub trait Raster {
    /// Validated shape of the image.
    fn layout(&self) -> Layout;

    /// Raw samples in row-major, channel-interleaved order.
    fn as_bytes(&self) -> &[u8];

    /// Image height in rows.
    #[inline]
    fn height(&self) -> usize {
        self.layout().height()
    }

    /// Image width in columns.
    #[inline]
    fn width(&self) -> usize {
        self.layout().width()
    }

    /// Number of channels (3 or 4).
    #[inline]
    fn channels(&self) -> usize {
        self.layout().channels()
    }

    /// Shape as `[height, width, channels]`.
    #[inline]
    fn shape(&self) -> [usize; 3] {
        self.layout().shape()
    }

    /// All channels of pixel `(row, col)`, or `None` outside the image.
    fn pixel(&self, row: usize, col: usize) -> Option<&[u8]> {
        let layout = self.layout();
        let start = layout.pixel_offset(row, col)?;
        self.as_bytes().get(start..start + layout.channels())
    }

    /// A single sample, or `None` outside the image.
    #[inline]
    fn get(&self, row: usize, col: usize, channel: usize) -> Option<u8> {
        let offset = self.layout().offset(row, col, channel)?;
        self.as_bytes().get(offset).copied()
    }

    /// Iterates pixels in storage order, one slice of `channels` samples each.
    #[inline]
    fn pixels(&self) -> ChunksExact<'_, u8> {
        self.as_bytes().chunks_exact(self.channels())
    }
}

/// Write access to a dense, row-major, channel-interleaved 8-bit image.
pub trait RasterMut: Raster {
    /// Raw mutable samples.
    fn as_bytes_mut(&mut self) -> &mut [u8];

    /// All channels of pixel `(row, col)`, mutably.
    fn pixel_mut(&mut self, row: usize, col: usize) -> Option<&mut [u8]> {
        let layout = self.layout();
        let start = layout.pixel_offset(row, col)?;
        self.as_bytes_mut().get_mut(start..start + layout.channels())
    }

    /// Writes a single sample.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfBounds`] if the coordinate is outside the image.
    fn set(&mut self, row: usize, col: usize, channel: usize, value: u8) -> Result<()> {
        let offset = self.layout().checked_offset(row, col, channel)?;
        self.as_bytes_mut()[offset] = value;
        Ok(())
    }

    /// Iterates pixels mutably in storage order.
    #[inline]
    fn pixels_mut(&mut self) -> ChunksExactMut<'_, u8> {
        let channels = self.channels();
        self.as_bytes_mut().chunks_exact_mut(channels)
    }
}

/// Owned image buffer.
///
/// The samples live in one contiguous `Vec<u8>` of length
/// `height * width * channels`.
///
/// # Example
///
/// ```rust
/// use iris_core::{ImageBuffer, Raster};
///
/// let img = ImageBuffer::from_raw(1, 2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
/// assert_eq!(img.pixel(0, 1), Some(&[4, 5, 6][..]));
/// assert!(ImageBuffer::from_raw(1, 2, 3, vec![0; 5]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageBuffer {
    layout: Layout,
    data: Vec<u8>,
}

impl ImageBuffer {
    /// Creates a zero-filled image.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidChannelCount`] or [`Error::WrongDimensionality`]
    /// from [`Layout::new`].
    pub fn new(height: usize, width: usize, channels: usize) -> Result<Self> {
        let layout = Layout::new(height, width, channels)?;
        Ok(Self::zeroed(layout))
    }

    /// Creates a zero-filled image with the given layout.
    pub fn zeroed(layout: Layout) -> Self {
        Self {
            layout,
            data: vec![0; layout.len()],
        }
    }

    /// Wraps existing samples.
    ///
    /// # Errors
    ///
    /// [`Error::WrongDimensionality`] if `data.len()` does not match the
    /// shape, [`Error::InvalidChannelCount`] for a bad channel count.
    pub fn from_raw(height: usize, width: usize, channels: usize, data: Vec<u8>) -> Result<Self> {
        Self::from_layout(Layout::new(height, width, channels)?, data)
    }

    /// Wraps existing samples described by a dynamic `[height, width, channels]` shape.
    ///
    /// # Errors
    ///
    /// [`Error::WrongDimensionality`] if the shape is not 3-dimensional or
    /// does not match `data.len()`.
    pub fn from_shape(shape: &[usize], data: Vec<u8>) -> Result<Self> {
        Self::from_layout(Layout::from_shape(shape)?, data)
    }

    /// Wraps existing samples with an already validated layout.
    ///
    /// # Errors
    ///
    /// [`Error::WrongDimensionality`] if `data.len() != layout.len()`.
    pub fn from_layout(layout: Layout, data: Vec<u8>) -> Result<Self> {
        layout.check_len(data.len())?;
        Ok(Self { layout, data })
    }

    /// Builds an image by evaluating `f(row, col, channel)` for every sample.
    ///
    /// # Example
    ///
    /// ```rust
    /// use iris_core::{ImageBuffer, Raster};
    ///
    /// let ramp = ImageBuffer::from_fn(2, 4, 3, |_, col, _| (col * 64) as u8).unwrap();
    /// assert_eq!(ramp.get(1, 3, 0), Some(192));
    /// ```
    pub fn from_fn<F>(height: usize, width: usize, channels: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize, usize) -> u8,
    {
        let layout = Layout::new(height, width, channels)?;
        let mut data = Vec::with_capacity(layout.len());
        for row in 0..height {
            for col in 0..width {
                for channel in 0..channels {
                    data.push(f(row, col, channel));
                }
            }
        }
        Ok(Self { layout, data })
    }

    /// Creates an image where every pixel equals `pixel`.
    ///
    /// The channel count is `pixel.len()`.
    pub fn filled(height: usize, width: usize, pixel: &[u8]) -> Result<Self> {
        let layout = Layout::new(height, width, pixel.len())?;
        let data = pixel.repeat(layout.pixel_count());
        Ok(Self { layout, data })
    }

    /// Consumes the image and returns its samples.
    #[inline]
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Borrows the image immutably.
    #[inline]
    pub fn view(&self) -> ImageView<'_> {
        ImageView {
            layout: self.layout,
            data: &self.data,
        }
    }

    /// Borrows the image mutably.
    #[inline]
    pub fn view_mut(&mut self) -> ImageViewMut<'_> {
        ImageViewMut {
            layout: self.layout,
            data: &mut self.data,
        }
    }
}

impl Raster for ImageBuffer {
    #[inline]
    fn layout(&self) -> Layout {
        self.layout
    }

    #[inline]
    fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl RasterMut for ImageBuffer {
    #[inline]
    fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

/// Immutable image borrowed from a caller-owned slice.
#[derive(Debug, Clone, Copy)]
pub struct ImageView<'a> {
    layout: Layout,
    data: &'a [u8],
}

impl<'a> ImageView<'a> {
    /// Wraps a slice with an explicit shape.
    ///
    /// # Errors
    ///
    /// Same as [`ImageBuffer::from_raw`].
    pub fn from_raw(height: usize, width: usize, channels: usize, data: &'a [u8]) -> Result<Self> {
        Self::from_layout(Layout::new(height, width, channels)?, data)
    }

    /// Wraps a slice described by a dynamic shape.
    ///
    /// # Errors
    ///
    /// Same as [`ImageBuffer::from_shape`].
    pub fn from_shape(shape: &[usize], data: &'a [u8]) -> Result<Self> {
        Self::from_layout(Layout::from_shape(shape)?, data)
    }

    /// Wraps a slice with an already validated layout.
    ///
    /// # Errors
    ///
    /// [`Error::WrongDimensionality`] if `data.len() != layout.len()`.
    pub fn from_layout(layout: Layout, data: &'a [u8]) -> Result<Self> {
        layout.check_len(data.len())?;
        Ok(Self { layout, data })
    }

    /// Copies the viewed samples into a new [`ImageBuffer`].
    pub fn to_buffer(&self) -> ImageBuffer {
        ImageBuffer {
            layout: self.layout,
            data: self.data.to_vec(),
        }
    }
}

impl Raster for ImageView<'_> {
    #[inline]
    fn layout(&self) -> Layout {
        self.layout
    }

    #[inline]
    fn as_bytes(&self) -> &[u8] {
        self.data
    }
}

/// Mutable image borrowed from a caller-owned slice.
#[derive(Debug)]
pub struct ImageViewMut<'a> {
    layout: Layout,
    data: &'a mut [u8],
}

impl<'a> ImageViewMut<'a> {
    /// Wraps a mutable slice with an explicit shape.
    ///
    /// # Errors
    ///
    /// Same as [`ImageBuffer::from_raw`].
    pub fn from_raw(
        height: usize,
        width: usize,
        channels: usize,
        data: &'a mut [u8],
    ) -> Result<Self> {
        Self::from_layout(Layout::new(height, width, channels)?, data)
    }

    /// Wraps a mutable slice described by a dynamic shape.
    ///
    /// # Errors
    ///
    /// Same as [`ImageBuffer::from_shape`].
    pub fn from_shape(shape: &[usize], data: &'a mut [u8]) -> Result<Self> {
        Self::from_layout(Layout::from_shape(shape)?, data)
    }

    /// Wraps a mutable slice with an already validated layout.
    ///
    /// # Errors
    ///
    /// [`Error::WrongDimensionality`] if `data.len() != layout.len()`.
    pub fn from_layout(layout: Layout, data: &'a mut [u8]) -> Result<Self> {
        layout.check_len(data.len())?;
        Ok(Self { layout, data })
    }

    /// Reborrows as an immutable view.
    #[inline]
    pub fn as_view(&self) -> ImageView<'_> {
        ImageView {
            layout: self.layout,
            data: &*self.data,
        }
    }
}

impl Raster for ImageViewMut<'_> {
    #[inline]
    fn layout(&self) -> Layout {
        self.layout
    }

    #[inline]
    fn as_bytes(&self) -> &[u8] {
        &*self.data
    }
}

impl RasterMut for ImageViewMut<'_> {
    #[inline]
    fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut *self.data
    }
}

impl<'a> TryFrom<ImageView<'a>> for ImageBuffer {
    type Error = Error;

    fn try_from(view: ImageView<'a>) -> Result<Self> {
        ImageBuffer::from_layout(view.layout(), view.as_bytes().to_vec())
    }
}
