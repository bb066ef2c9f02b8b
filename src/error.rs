//! Error type for mesh construction and boundary operations.

use thiserror::Error;

/// Errors raised while building or mutating a mesh.
///
/// All variants describe caller or configuration mistakes; none of them are
/// transient, so there is nothing to retry.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MeshError {
    /// Bad dimensionality, mismatched list lengths, unknown scheme,
    /// non-increasing bounds or too few cells.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Side label not recognised, or not valid for the target axis.
    #[error("Invalid side '{side}': {reason}")]
    InvalidSide { side: String, reason: String },

    /// State array length does not match the mesh.
    #[error("Unsupported phi shape: expected {expected} values, got {actual}")]
    UnsupportedPhiShape { expected: usize, actual: usize },
}

impl MeshError {
    /// Create an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }

    /// Create an invalid side error.
    pub fn invalid_side(side: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSide {
            side: side.into(),
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MeshError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = MeshError::invalid_config("dimensions must be 1 or 2, got 3");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: dimensions must be 1 or 2, got 3"
        );

        let err = MeshError::invalid_side("top", "not valid for the x axis");
        assert_eq!(err.to_string(), "Invalid side 'top': not valid for the x axis");

        let err = MeshError::UnsupportedPhiShape {
            expected: 12,
            actual: 4,
        };
        assert!(err.to_string().contains("expected 12"));
    }
}
