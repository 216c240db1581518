//! Error types for numkern

use thiserror::Error;

/// Result type alias using numkern's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in numkern operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Incompatible dimensions for an operation
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected shape
        expected: Vec<usize>,
        /// Actual shape
        got: Vec<usize>,
    },

    /// Matrix inversion hit a pivot below the configured tolerance
    #[error("Matrix is singular")]
    SingularMatrix,

    /// Linear solve hit a pivot below the configured tolerance
    #[error("Linear system has no unique solution")]
    NoUniqueSolution,

    /// LU decomposition (no pivoting) hit a near-zero diagonal entry
    #[error("Zero pivot at index {index} in LU decomposition")]
    ZeroPivot {
        /// Diagonal index of the offending pivot
        index: usize,
    },

    /// FFT input length is not 1 or a power of two
    #[error("{op} requires a power-of-2 length, got {len}")]
    InvalidLength {
        /// The rejected length
        len: usize,
        /// The operation name
        op: &'static str,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },
}

impl Error {
    /// Create a shape mismatch error
    pub fn shape_mismatch(expected: &[usize], got: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            got: got.to_vec(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }
}
