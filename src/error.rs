//! Error types for the lookback library.

use thiserror::Error;

/// Result type alias for forecasting and windowing operations.
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Errors that can occur while building forecasters or windowing data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Fewer observations than the lookback requires.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Array rank does not match what the operation expects.
    #[error("shape mismatch: expected {expected}-dimensional data, got {got} dimensions")]
    ShapeMismatch { expected: usize, got: usize },

    /// Input cannot be represented as a 1-D or 2-D dataset.
    #[error("data is not convertible: {0}")]
    UnconvertibleData(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_are_descriptive() {
        let err = ForecastError::InsufficientData { needed: 10, got: 5 };
        assert_eq!(
            err.to_string(),
            "insufficient data: need at least 10, got 5"
        );

        let err = ForecastError::InvalidParameter("n_lookback must be positive".to_string());
        assert_eq!(
            err.to_string(),
            "invalid parameter: n_lookback must be positive"
        );

        let err = ForecastError::ShapeMismatch {
            expected: 1,
            got: 2,
        };
        assert_eq!(
            err.to_string(),
            "shape mismatch: expected 1-dimensional data, got 2 dimensions"
        );

        let err = ForecastError::UnconvertibleData("ragged rows".to_string());
        assert_eq!(err.to_string(), "data is not convertible: ragged rows");
    }

    #[test]
    fn errors_are_clonable_and_comparable() {
        let err1 = ForecastError::InsufficientData { needed: 4, got: 2 };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
