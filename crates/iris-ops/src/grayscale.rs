//! Luminosity grayscale conversion.
//!
//! Replaces the red, green and blue channels of every pixel with
//!
//! ```text
//! gray = floor(0.21 * R + 0.72 * G + 0.07 * B)
//! ```
//!
//! in place. A fourth (alpha) channel is neither read nor written.
//!
//! The weighted sum is evaluated in fixed point (hundredths), which gives
//! the exact floor for every input. Since the weights sum to 1, a pixel
//! with `R == G == B` maps to itself and the conversion is idempotent.
//!
//! # Example
//!
//! ```rust
//! use iris_core::{ImageBuffer, Raster};
//! use iris_ops::grayscale;
//!
//! let mut img = ImageBuffer::from_raw(1, 2, 4, vec![0, 255, 0, 9, 255, 255, 255, 1]).unwrap();
//! grayscale::convert(&mut img).unwrap();
//! assert_eq!(img.pixel(0, 0), Some(&[183, 183, 183, 9][..]));
//! assert_eq!(img.pixel(0, 1), Some(&[255, 255, 255, 1][..]));
//! ```

use crate::{guard, OpsResult};
use iris_core::{RasterMut, COLOR_CHANNELS};
use tracing::trace;

/// Red weight of the luminosity method.
pub const LUMA_R: f64 = 0.21;
/// Green weight of the luminosity method.
pub const LUMA_G: f64 = 0.72;
/// Blue weight of the luminosity method.
pub const LUMA_B: f64 = 0.07;

/// Luminosity weights as `[R, G, B]`.
pub const LUMA_WEIGHTS: [f64; 3] = [LUMA_R, LUMA_G, LUMA_B];

// Same weights in hundredths; must stay in sync with the f64 constants.
const LUMA_SCALE: u32 = 100;
const LUMA_FIXED: [u32; 3] = [21, 72, 7];

/// Gray level of a single RGB triple.
///
/// # Example
///
/// ```rust
/// use iris_ops::grayscale::luminance;
///
/// assert_eq!(luminance(255, 0, 0), 53);
/// assert_eq!(luminance(0, 255, 0), 183);
/// assert_eq!(luminance(0, 0, 255), 17);
/// assert_eq!(luminance(200, 200, 200), 200);
/// ```
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    let [wr, wg, wb] = LUMA_FIXED;
    let sum = wr * u32::from(r) + wg * u32::from(g) + wb * u32::from(b);
    // At most 255 * LUMA_SCALE / LUMA_SCALE.
    (sum / LUMA_SCALE) as u8
}

/// Converts an image to grayscale in place.
///
/// Accepts anything writable as a raster: an owned
/// [`ImageBuffer`](iris_core::ImageBuffer) or an
/// [`ImageViewMut`](iris_core::ImageViewMut) over caller memory.
///
/// # Errors
///
/// Returns `WrongDimensionality` if the image storage does not match its
/// layout. Nothing is written in that case. (A channel count other than 3
/// or 4 cannot reach this function: such a layout cannot be constructed and
/// fails with `InvalidChannelCount` at the boundary.)
pub fn convert<R: RasterMut + ?Sized>(image: &mut R) -> OpsResult<()> {
    let layout = guard::ensure_well_formed(&*image, "grayscale")?;
    trace!(
        height = layout.height(),
        width = layout.width(),
        channels = layout.channels(),
        "grayscale::convert"
    );

    for px in image.pixels_mut() {
        let gray = luminance(px[0], px[1], px[2]);
        px[..COLOR_CHANNELS].fill(gray);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use iris_core::{ImageBuffer, ImageViewMut, Raster};

    #[test]
    fn test_fixed_weights_match_named_constants() {
        for (fixed, weight) in LUMA_FIXED.iter().zip(LUMA_WEIGHTS) {
            assert_eq!(f64::from(*fixed) / f64::from(LUMA_SCALE), weight);
        }
        assert_eq!(LUMA_FIXED.iter().sum::<u32>(), LUMA_SCALE);
    }

    #[test]
    fn test_luminance_truncates() {
        // 0.21*10 + 0.72*20 + 0.07*30 = 18.6
        assert_eq!(luminance(10, 20, 30), 18);
        // 0.21*1 + 0.72*1 + 0.07*0 = 0.93
        assert_eq!(luminance(1, 1, 0), 0);
        assert_eq!(luminance(0, 0, 0), 0);
    }

    #[test]
    fn test_gray_levels_are_fixed_points() {
        for v in 0..=255u8 {
            assert_eq!(luminance(v, v, v), v);
        }
    }

    #[test]
    fn test_convert_rgb_scenario() {
        let mut img = ImageBuffer::from_raw(
            2,
            2,
            3,
            vec![255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255],
        )
        .unwrap();
        convert(&mut img).unwrap();

        assert_eq!(img.pixel(0, 0), Some(&[53, 53, 53][..]));
        assert_eq!(img.pixel(0, 1), Some(&[183, 183, 183][..]));
        assert_eq!(img.pixel(1, 0), Some(&[17, 17, 17][..]));
        assert_eq!(img.pixel(1, 1), Some(&[255, 255, 255][..]));
    }

    #[test]
    fn test_alpha_untouched() {
        let mut img = ImageBuffer::from_fn(3, 3, 4, |r, c, ch| match ch {
            3 => (r * 3 + c) as u8 * 20,
            _ => (r * 40 + c * 30 + ch * 7) as u8,
        })
        .unwrap();
        let before = img.clone();
        convert(&mut img).unwrap();

        for (new, old) in img.pixels().zip(before.pixels()) {
            assert_eq!(new[3], old[3]);
            assert_eq!(new[0], luminance(old[0], old[1], old[2]));
            assert_eq!(new[0], new[1]);
            assert_eq!(new[1], new[2]);
        }
    }

    #[test]
    fn test_idempotent() {
        let mut img = ImageBuffer::from_fn(4, 5, 3, |r, c, ch| (r * 61 + c * 17 + ch * 89) as u8)
            .unwrap();
        convert(&mut img).unwrap();
        let once = img.clone();
        convert(&mut img).unwrap();
        assert_eq!(img, once);
    }

    #[test]
    fn test_convert_view_in_place() {
        let mut samples = vec![0u8, 255, 0, 0, 0, 255];
        let mut view = ImageViewMut::from_raw(1, 2, 3, &mut samples).unwrap();
        convert(&mut view).unwrap();
        assert_eq!(samples, vec![183, 183, 183, 17, 17, 17]);
    }

    #[test]
    fn test_empty_image() {
        let mut img = ImageBuffer::new(0, 0, 3).unwrap();
        assert!(convert(&mut img).is_ok());
        assert!(img.as_bytes().is_empty());
    }
}
