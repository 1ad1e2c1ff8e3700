//! Error types for image operations.

use std::fmt;
use thiserror::Error;

/// Error type for image operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OpsError {
    /// The input is not a well-formed image (shape, channel count or bounds).
    #[error(transparent)]
    Image(#[from] iris_core::Error),

    /// Blur radius below 1.
    #[error("invalid radius {radius}: must be at least 1")]
    InvalidRadius {
        /// Radius that was requested
        radius: i64,
    },
}

impl OpsError {
    /// Classifies the error independently of any host runtime.
    ///
    /// Front ends (CLI, Python module) dispatch on this rather than on the
    /// error's message.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Image(iris_core::Error::WrongDimensionality { .. }) => {
                ErrorKind::WrongDimensionality
            }
            Self::Image(iris_core::Error::InvalidChannelCount { .. }) => {
                ErrorKind::InvalidChannelCount
            }
            Self::Image(iris_core::Error::OutOfBounds { .. }) => ErrorKind::OutOfBounds,
            Self::InvalidRadius { .. } => ErrorKind::InvalidRadius,
        }
    }
}

/// Kind of failure reported by an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input is not organized as height x width x channels.
    WrongDimensionality,
    /// Channel count is not 3 or 4.
    InvalidChannelCount,
    /// Blur radius below 1.
    InvalidRadius,
    /// A coordinate fell outside the image.
    OutOfBounds,
}

impl ErrorKind {
    /// Stable name of the kind, e.g. `"InvalidRadius"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WrongDimensionality => "WrongDimensionality",
            Self::InvalidChannelCount => "InvalidChannelCount",
            Self::InvalidRadius => "InvalidRadius",
            Self::OutOfBounds => "OutOfBounds",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result type for image operations.
pub type OpsResult<T> = Result<T, OpsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        let err: OpsError = iris_core::Error::wrong_dimensionality("rank 2").into();
        assert_eq!(err.kind(), ErrorKind::WrongDimensionality);

        let err: OpsError = iris_core::Error::invalid_channel_count(1).into();
        assert_eq!(err.kind(), ErrorKind::InvalidChannelCount);

        let err = OpsError::InvalidRadius { radius: 0 };
        assert_eq!(err.kind(), ErrorKind::InvalidRadius);
        assert_eq!(err.kind().to_string(), "InvalidRadius");
    }

    #[test]
    fn test_transparent_message() {
        let err: OpsError = iris_core::Error::invalid_channel_count(2).into();
        assert_eq!(err.to_string(), iris_core::Error::invalid_channel_count(2).to_string());
    }
}
