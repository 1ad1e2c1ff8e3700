//! # iris-ops
//!
//! Image filters for 8-bit RGB/RGBA rasters.
//!
//! # Modules
//!
//! - [`grayscale`] - In-place luminosity grayscale conversion
//! - [`blur`] - Box blur into a new buffer
//! - [`guard`] - Eager input validation shared by both
//!
//! Both filters are stateless and synchronous. They validate their inputs
//! before touching any sample: a failed call leaves the input as it was and
//! allocates nothing.
//!
//! # Example
//!
//! ```rust
//! use iris_core::{ImageBuffer, Raster};
//! use iris_ops::{blur, grayscale};
//!
//! let mut img = ImageBuffer::from_fn(4, 4, 3, |r, c, _| (r * 60 + c * 5) as u8).unwrap();
//!
//! let blurred = blur::box_blur(&img, 1).unwrap();
//! assert_eq!(blurred.shape(), img.shape());
//!
//! grayscale::convert(&mut img).unwrap();
//! assert!(img.pixels().all(|p| p[0] == p[1] && p[1] == p[2]));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod blur;
pub mod grayscale;
pub mod guard;

pub use blur::{box_blur, BlurMethod, BoxBlur, DEFAULT_RADIUS};
pub use error::{ErrorKind, OpsError, OpsResult};
