//! Dense matrix and vector operations
//!
//! Operations are defined as traits implemented by a runtime client, so a
//! collaborator can be written against [`MatrixOps`] / [`VectorOps`] without
//! naming the backend.
//!
//! ```text
//! CpuClient
//!   ├── implements MatrixOps
//!   │     └── matmul, add, scalar_mul, transpose
//!   └── implements VectorOps
//!         └── dot, magnitude, normalize
//! ```
//!
//! Shape preconditions are validated at entry with the helpers in this
//! module and reported as [`crate::error::Error::ShapeMismatch`].

mod matmul;
pub mod traits;

pub use matmul::{validate_matmul_shapes, validate_same_shape};
pub use traits::{MatrixOps, VectorOps};
