//! Operation traits for dense matrices and vectors.
//!
//! Implementations are in the backend-specific modules (`runtime/cpu/`).

mod matrix;
mod vector;

pub use matrix::MatrixOps;
pub use vector::VectorOps;
