//! CPU kernel implementations
//!
//! Low-level compute kernels over row-major `f64` buffers. Kernels assume
//! their inputs were validated by the calling client method and never
//! allocate more than their output.

pub mod conv;
pub mod cumulative;
pub mod elimination;
pub mod fft;
pub mod image;
pub mod matmul;
pub mod vector;

pub use conv::{conv1d_full_kernel, conv2d_same_kernel, gaussian_kernel};
pub use cumulative::rolling_mean_kernel;
pub use elimination::{EliminationMode, back_substitute, gaussian_eliminate};
pub use fft::{fft_batch_real, fft_complex, fft_real};
pub use image::{histogram_equalize_kernel, rotate_nearest_kernel};
pub use matmul::matmul_kernel;
#[cfg(feature = "rayon")]
pub use matmul::matmul_parallel_kernel;
pub use vector::{dot_kernel, sum_of_squares_kernel};
