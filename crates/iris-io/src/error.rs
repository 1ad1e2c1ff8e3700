//! Error types for image file I/O.

use std::io;
use thiserror::Error;

/// I/O operation error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Format not recognized from the path.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Decoding error.
    #[error("decode error: {0}")]
    Decode(String),

    /// Encoding error.
    #[error("encode error: {0}")]
    Encode(String),

    /// Decoded pixels do not form a valid image.
    #[error(transparent)]
    Image(#[from] iris_core::Error),
}

impl From<png::DecodingError> for IoError {
    fn from(err: png::DecodingError) -> Self {
        match err {
            png::DecodingError::IoError(e) => Self::Io(e),
            other => Self::Decode(other.to_string()),
        }
    }
}

impl From<png::EncodingError> for IoError {
    fn from(err: png::EncodingError) -> Self {
        match err {
            png::EncodingError::IoError(e) => Self::Io(e),
            other => Self::Encode(other.to_string()),
        }
    }
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;
