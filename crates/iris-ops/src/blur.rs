//! Box blur with a shrinking window at the image border.
//!
//! Every output sample is the integer mean of the input samples of the
//! same channel inside the square window `[-radius, radius]^2` around the
//! pixel. Window positions that fall outside the image are skipped, not
//! padded or clamped, so the divisor is the number of in-bounds samples:
//!
//! ```text
//! corner pixel:            (r + 1)^2        samples
//! edge (non-corner) pixel: (r + 1)(2r + 1)  samples
//! interior pixel:          (2r + 1)^2       samples
//! ```
//!
//! The input is never modified; the result is a new [`ImageBuffer`] with
//! the same shape.
//!
//! # Methods
//!
//! - [`BlurMethod::Naive`] - Scans the window for every pixel, O((2r+1)^2)
//! - [`BlurMethod::SummedArea`] - Summed-area table, O(1) per pixel
//!
//! Both give bit-identical output.
//!
//! # Example
//!
//! ```rust
//! use iris_core::{ImageBuffer, Raster};
//! use iris_ops::blur::{box_blur, BlurMethod, BoxBlur};
//!
//! let img = ImageBuffer::from_raw(1, 3, 3, vec![0, 0, 0, 90, 90, 90, 0, 0, 0]).unwrap();
//!
//! let out = box_blur(&img, 1).unwrap();
//! assert_eq!(out.pixel(0, 0), Some(&[45, 45, 45][..]));
//! assert_eq!(out.pixel(0, 1), Some(&[30, 30, 30][..]));
//!
//! let naive = BoxBlur::new(1).unwrap().with_method(BlurMethod::Naive).apply(&img).unwrap();
//! assert_eq!(naive, out);
//! ```

use crate::{guard, OpsResult};
use iris_core::{ImageBuffer, Layout, Raster, RasterMut};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;
use tracing::{debug, trace};

/// Radius used when the caller does not pass one.
pub const DEFAULT_RADIUS: i64 = 1;

/// How the window sums are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlurMethod {
    /// Direct scan of every window.
    Naive,
    /// Summed-area table (integral image).
    #[default]
    SummedArea,
}

impl BlurMethod {
    /// All methods, in declaration order.
    pub const ALL: [BlurMethod; 2] = [BlurMethod::Naive, BlurMethod::SummedArea];

    /// Name accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Naive => "naive",
            Self::SummedArea => "summed-area",
        }
    }
}

impl fmt::Display for BlurMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlurMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "naive" | "direct" => Ok(Self::Naive),
            "summed-area" | "summed_area" | "integral" | "sat" => Ok(Self::SummedArea),
            other => Err(format!(
                "unknown blur method '{other}' (expected 'naive' or 'summed-area')"
            )),
        }
    }
}

/// Configured box blur.
///
/// # Example
///
/// ```rust
/// use iris_ops::blur::{BlurMethod, BoxBlur};
///
/// let blur = BoxBlur::default();
/// assert_eq!(blur.radius(), 1);
/// assert_eq!(blur.method(), BlurMethod::SummedArea);
///
/// assert!(BoxBlur::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoxBlur {
    radius: usize,
    method: BlurMethod,
}

impl Default for BoxBlur {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS as usize,
            method: BlurMethod::default(),
        }
    }
}

impl BoxBlur {
    /// Creates a blur with the given radius and the default method.
    ///
    /// # Errors
    ///
    /// [`OpsError::InvalidRadius`](crate::OpsError::InvalidRadius) if `radius < 1`.
    pub fn new(radius: i64) -> OpsResult<Self> {
        Ok(Self {
            radius: guard::ensure_radius(radius)?,
            method: BlurMethod::default(),
        })
    }

    /// Selects how window sums are computed.
    pub fn with_method(mut self, method: BlurMethod) -> Self {
        self.method = method;
        self
    }

    /// Window half-width.
    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Selected method.
    pub fn method(&self) -> BlurMethod {
        self.method
    }

    /// Blurs `src` into a newly allocated image of the same shape.
    ///
    /// # Errors
    ///
    /// `WrongDimensionality` if the image storage does not match its layout.
    pub fn apply<R: Raster + ?Sized>(&self, src: &R) -> OpsResult<ImageBuffer> {
        let layout = guard::ensure_well_formed(src, "box_blur")?;
        trace!(
            height = layout.height(),
            width = layout.width(),
            channels = layout.channels(),
            radius = self.radius,
            "box_blur"
        );
        debug!(method = %self.method, radius = self.radius, "Applying box blur");

        let mut dst = ImageBuffer::zeroed(layout);
        match self.method {
            BlurMethod::Naive => blur_naive(src.as_bytes(), layout, self.radius, dst.as_bytes_mut()),
            BlurMethod::SummedArea => {
                blur_summed_area(src.as_bytes(), layout, self.radius, dst.as_bytes_mut())
            }
        }
        Ok(dst)
    }
}

/// Blurs `src` with the given radius using the default method.
///
/// # Errors
///
/// - [`OpsError::InvalidRadius`](crate::OpsError::InvalidRadius) if `radius < 1`
/// - `WrongDimensionality` if the image storage does not match its layout
pub fn box_blur<R: Raster + ?Sized>(src: &R, radius: i64) -> OpsResult<ImageBuffer> {
    BoxBlur::new(radius)?.apply(src)
}

/// In-bounds part of the window around one pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    /// Rows covered, clipped to the image.
    pub rows: Range<usize>,
    /// Columns covered, clipped to the image.
    pub cols: Range<usize>,
}

impl Window {
    /// Window of half-width `radius` around `(row, col)`, clipped to `layout`.
    pub fn around(layout: Layout, row: usize, col: usize, radius: usize) -> Self {
        Self {
            rows: clip(row, radius, layout.height()),
            cols: clip(col, radius, layout.width()),
        }
    }

    /// Number of in-bounds pixels, i.e. the divisor of the mean.
    ///
    /// # Example
    ///
    /// ```rust
    /// use iris_core::Layout;
    /// use iris_ops::blur::Window;
    ///
    /// let layout = Layout::new(10, 10, 3).unwrap();
    /// assert_eq!(Window::around(layout, 0, 0, 2).len(), 9);
    /// assert_eq!(Window::around(layout, 0, 5, 2).len(), 15);
    /// assert_eq!(Window::around(layout, 5, 5, 2).len(), 25);
    /// ```
    pub fn len(&self) -> usize {
        self.rows.len() * self.cols.len()
    }

    /// Returns `true` if no pixel is covered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[inline]
fn clip(center: usize, radius: usize, extent: usize) -> Range<usize> {
    let start = center.saturating_sub(radius);
    let end = center.saturating_add(radius).saturating_add(1).min(extent);
    start..end
}

/// Sample range of `cols` within `row`.
#[inline]
fn span(layout: Layout, row: usize, cols: &Range<usize>) -> Range<usize> {
    let base = row * layout.row_stride();
    let channels = layout.channels();
    base + cols.start * channels..base + cols.end * channels
}

fn blur_naive(src: &[u8], layout: Layout, radius: usize, dst: &mut [u8]) {
    let channels = layout.channels();
    let mut sums = [0u64; 4];

    for (index, out) in dst.chunks_exact_mut(channels).enumerate() {
        let (row, col) = (index / layout.width(), index % layout.width());
        let window = Window::around(layout, row, col, radius);
        let sums = &mut sums[..channels];
        sums.fill(0);

        for y in window.rows.clone() {
            for px in src[span(layout, y, &window.cols)].chunks_exact(channels) {
                for (sum, &v) in sums.iter_mut().zip(px) {
                    *sum += u64::from(v);
                }
            }
        }

        let count = window.len() as u64;
        for (o, sum) in out.iter_mut().zip(sums.iter()) {
            *o = (sum / count) as u8;
        }
    }
}

/// Summed-area table with one zero row and column of padding.
///
/// Entry `(y, x, ch)` holds the sum of channel `ch` over rows `0..y` and
/// columns `0..x` of the source.
struct SummedAreaTable {
    width: usize,
    channels: usize,
    sums: Vec<u64>,
}

impl SummedAreaTable {
    fn build(src: &[u8], layout: Layout) -> Self {
        let (width, channels) = (layout.width() + 1, layout.channels());
        let mut sums = vec![0u64; (layout.height() + 1) * width * channels];
        let mut row_sum = [0u64; 4];

        for y in 0..layout.height() {
            let row_sum = &mut row_sum[..channels];
            row_sum.fill(0);
            let row = &src[span(layout, y, &(0..layout.width()))];
            for (x, px) in row.chunks_exact(channels).enumerate() {
                let above = (y * width + x + 1) * channels;
                let here = ((y + 1) * width + x + 1) * channels;
                for ch in 0..channels {
                    row_sum[ch] += u64::from(px[ch]);
                    sums[here + ch] = sums[above + ch] + row_sum[ch];
                }
            }
        }

        Self {
            width,
            channels,
            sums,
        }
    }

    #[inline]
    fn at(&self, y: usize, x: usize, ch: usize) -> u64 {
        self.sums[(y * self.width + x) * self.channels + ch]
    }

    /// Sum of channel `ch` over the window.
    #[inline]
    fn window_sum(&self, window: &Window, ch: usize) -> u64 {
        let (y0, y1) = (window.rows.start, window.rows.end);
        let (x0, x1) = (window.cols.start, window.cols.end);
        self.at(y1, x1, ch) + self.at(y0, x0, ch) - self.at(y0, x1, ch) - self.at(y1, x0, ch)
    }
}

fn blur_summed_area(src: &[u8], layout: Layout, radius: usize, dst: &mut [u8]) {
    if layout.is_empty() {
        return;
    }
    let table = SummedAreaTable::build(src, layout);
    let channels = layout.channels();

    for (index, out) in dst.chunks_exact_mut(channels).enumerate() {
        let (row, col) = (index / layout.width(), index % layout.width());
        let window = Window::around(layout, row, col, radius);
        let count = window.len() as u64;
        for (ch, o) in out.iter_mut().enumerate() {
            *o = (table.window_sum(&window, ch) / count) as u8;
        }
    }
}
