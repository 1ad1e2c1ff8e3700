//! Python bindings for Iris.
//!
//! Exposes the two filters on `uint8` numpy arrays of shape
//! `(height, width, channels)`:
//!
//! ```python
//! import numpy as np
//! import iris
//!
//! img = np.array([[[255, 0, 0], [0, 255, 0]],
//!                 [[0, 0, 255], [255, 255, 255]]], dtype=np.uint8)
//!
//! soft = iris.apply_box_blur(img)      # new array, img untouched
//! iris.convert_to_grayscale(img)       # in place
//! ```

use iris_core::{ImageView, ImageViewMut, Raster};
use iris_ops::{grayscale, BoxBlur, ErrorKind, OpsError, DEFAULT_RADIUS};
use numpy::{
    IntoPyArray, PyArray3, PyArrayMethods, PyReadonlyArrayDyn, PyReadwriteArrayDyn,
    PyUntypedArrayMethods,
};
use pyo3::create_exception;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

create_exception!(iris, IrisError, PyValueError, "Base class for Iris image errors.");
create_exception!(
    iris,
    WrongDimensionalityError,
    IrisError,
    "Array is not a contiguous (height, width, channels) image."
);
create_exception!(
    iris,
    InvalidChannelCountError,
    IrisError,
    "Image has a channel count other than 3 (RGB) or 4 (RGBA)."
);
create_exception!(iris, InvalidRadiusError, IrisError, "Blur radius is less than 1.");

fn to_py_err(err: OpsError) -> PyErr {
    let msg = err.to_string();
    match err.kind() {
        ErrorKind::WrongDimensionality => WrongDimensionalityError::new_err(msg),
        ErrorKind::InvalidChannelCount => InvalidChannelCountError::new_err(msg),
        ErrorKind::InvalidRadius => InvalidRadiusError::new_err(msg),
        ErrorKind::OutOfBounds => IrisError::new_err(msg),
    }
}

fn not_contiguous(err: impl std::fmt::Display) -> PyErr {
    WrongDimensionalityError::new_err(format!("array must be C-contiguous: {err}"))
}

/// Convert an RGB/RGBA image to grayscale in place.
///
/// Uses the luminosity weights 0.21 R + 0.72 G + 0.07 B, truncated.
/// An alpha channel is left as it is.
///
/// # Example
/// ```python
/// iris.convert_to_grayscale(img)
/// ```
#[pyfunction]
#[pyo3(signature = (array))]
fn convert_to_grayscale(mut array: PyReadwriteArrayDyn<'_, u8>) -> PyResult<()> {
    let shape = array.shape().to_vec();
    let data = array.as_slice_mut().map_err(not_contiguous)?;
    let mut view = ImageViewMut::from_shape(&shape, data).map_err(|e| to_py_err(e.into()))?;
    grayscale::convert(&mut view).map_err(to_py_err)
}

/// Box-blur an RGB/RGBA image into a new array.
///
/// Each output sample is the truncated mean of the samples within
/// `radius` pixels that lie inside the image.
///
/// # Example
/// ```python
/// out = iris.apply_box_blur(img, radius=2)
/// ```
#[pyfunction]
#[pyo3(signature = (array, radius = DEFAULT_RADIUS))]
fn apply_box_blur<'py>(
    py: Python<'py>,
    array: PyReadonlyArrayDyn<'py, u8>,
    radius: i64,
) -> PyResult<Bound<'py, PyArray3<u8>>> {
    let shape = array.shape().to_vec();
    let data = array.as_slice().map_err(not_contiguous)?;
    let view = ImageView::from_shape(&shape, data).map_err(|e| to_py_err(e.into()))?;
    let blur = BoxBlur::new(radius).map_err(to_py_err)?;

    let out = blur.apply(&view).map_err(to_py_err)?;
    let [h, w, c] = out.shape();
    out.into_raw().into_pyarray(py).reshape([h, w, c])
}

/// iris - grayscale conversion and box blur for numpy images
#[pymodule]
fn iris(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let py = m.py();
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add("DEFAULT_RADIUS", DEFAULT_RADIUS)?;

    m.add("IrisError", py.get_type::<IrisError>())?;
    m.add("WrongDimensionalityError", py.get_type::<WrongDimensionalityError>())?;
    m.add("InvalidChannelCountError", py.get_type::<InvalidChannelCountError>())?;
    m.add("InvalidRadiusError", py.get_type::<InvalidRadiusError>())?;

    m.add_function(wrap_pyfunction!(convert_to_grayscale, m)?)?;
    m.add_function(wrap_pyfunction!(apply_box_blur, m)?)?;
    Ok(())
}
