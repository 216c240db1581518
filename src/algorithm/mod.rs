//! Algorithm contracts for runtime backends
//!
//! Every algorithm is defined as a trait first and then implemented by a
//! backend client. The trait documentation pins down the exact algorithm
//! (pivot rule, recursion, padding convention) so that any implementation
//! produces the same results within floating-point tolerance.
//!
//! # Available Algorithm Contracts
//!
//! - [`LinearAlgebraAlgorithms`] - inverse, determinant, LU, solve, trace
//! - [`FftAlgorithms`] - recursive radix-2 FFT and its inverses
//! - [`SignalAlgorithms`] - convolution, Gaussian blur, rotation,
//!   histogram equalization, rolling mean

pub mod fft;
pub mod linalg;
pub mod signal;

pub use fft::{FftAlgorithms, Spectrum, is_power_of_two, validate_fft_size};
pub use linalg::{LinearAlgebraAlgorithms, LuDecomposition, validate_square_matrix};
pub use signal::{DEFAULT_BLUR_KERNEL_SIZE, DEFAULT_BLUR_SIGMA, SignalAlgorithms};
