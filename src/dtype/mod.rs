//! Element types used by numkern kernels
//!
//! Matrices and vectors are plain `f64`. The only additional element type is
//! [`Complex128`], which the FFT kernels use for their butterflies.

pub mod complex;

pub use complex::Complex128;
