//! # numkern
//!
//! **Dense linear algebra and signal-processing kernels over plain `f64` data.**
//!
//! numkern exposes a small set of classic numerical routines behind
//! trait contracts, with a CPU client as the reference backend:
//!
//! - **Matrices and vectors**: matmul, add, scalar multiply, transpose,
//!   identity, dot, magnitude, normalize
//! - **Linear algebra**: Gauss-Jordan inverse, cofactor determinant,
//!   Doolittle LU, partial-pivoting linear solve
//! - **FFT**: recursive radix-2 Cooley-Tukey for power-of-two lengths
//! - **Signal and image**: 1-D/2-D convolution, Gaussian kernels and blur,
//!   nearest-neighbor rotation, histogram equalization, rolling mean
//!
//! Every call is pure: inputs are borrowed, outputs are freshly allocated,
//! and no state survives between calls.
//!
//! ## Quick Start
//!
//! ```
//! use numkern::prelude::*;
//!
//! let client = CpuClient::new();
//! let a = Matrix::from_rows(&[[4.0, 7.0], [2.0, 6.0]])?;
//!
//! let inv = client.inverse(&a)?;
//! let x = client.solve(&a, &[1.0, 2.0])?;
//! let spectrum = client.fft(&[1.0, 0.0, 0.0, 0.0])?;
//!
//! assert!((inv[(0, 0)] - 0.6).abs() < 1e-12);
//! assert_eq!(x.len(), 2);
//! assert_eq!(spectrum.real.len(), 4);
//! # Ok::<(), numkern::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` (default): row-parallel matmul and batched FFT

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithm;
pub mod dtype;
pub mod error;
pub mod matrix;
pub mod ops;
pub mod runtime;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithm::{
        FftAlgorithms, LinearAlgebraAlgorithms, LuDecomposition, SignalAlgorithms, Spectrum,
    };
    pub use crate::dtype::Complex128;
    pub use crate::error::{Error, Result};
    pub use crate::matrix::Matrix;
    pub use crate::ops::{MatrixOps, VectorOps};
    pub use crate::runtime::KernelConfig;
    pub use crate::runtime::cpu::CpuClient;
}
