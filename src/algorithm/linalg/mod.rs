//! Linear algebra algorithm contracts
//!
//! This module defines the trait every backend implements for inversion,
//! determinants, LU factorization and linear solves, together with the
//! result types and validation helpers those implementations share.
//!
//! # Module Structure
//!
//! - `decompositions`: Result types ([`LuDecomposition`])
//! - `traits`: [`LinearAlgebraAlgorithms`]
//! - `helpers`: Validation utilities and pivot checks

pub mod decompositions;
pub mod helpers;
pub mod traits;

pub use decompositions::*;
pub use helpers::*;
pub use traits::*;
