//! Error types for anchor-match crate.

use thiserror::Error;

/// Errors that can occur while building matches or targets.
#[derive(Debug, Error)]
pub enum MatchError {
    /// Invalid match configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Ground-truth input error.
    #[error("ground truth error: {0}")]
    GroundTruth(String),

    /// Data size mismatch.
    #[error("shape mismatch: expected {expected} values, got {actual}")]
    ShapeMismatch {
        /// Expected number of values.
        expected: usize,
        /// Actual number of values.
        actual: usize,
    },
}

impl MatchError {
    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig(reason.into())
    }

    /// Creates a ground-truth error.
    #[must_use]
    pub fn ground_truth(reason: impl Into<String>) -> Self {
        Self::GroundTruth(reason.into())
    }
}

impl From<anchor_types::AnchorTypesError> for MatchError {
    fn from(err: anchor_types::AnchorTypesError) -> Self {
        Self::GroundTruth(err.to_string())
    }
}

/// Result type for matching operations.
pub type Result<T> = std::result::Result<T, MatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_config() {
        let err = MatchError::invalid_config("threshold must be in [0, 1)");
        assert!(err.to_string().contains("invalid configuration"));
        assert!(err.to_string().contains("threshold"));
    }

    #[test]
    fn error_shape_mismatch() {
        let err = MatchError::ShapeMismatch {
            expected: 8,
            actual: 6,
        };
        assert!(err.to_string().contains("expected 8"));
        assert!(err.to_string().contains("got 6"));
    }

    #[test]
    fn error_from_types_error() {
        let inner = anchor_types::AnchorTypesError::InvalidClassId { id: 5, max: 4 };
        let err: MatchError = inner.into();
        assert!(matches!(err, MatchError::GroundTruth(_)));
        assert!(err.to_string().contains("invalid class ID 5"));
    }
}
