//! CPU runtime implementation
//!
//! The CPU runtime is the reference implementation of every algorithm
//! contract. Operations are synchronous and allocate fresh outputs; the only
//! parallelism is the optional rayon fan-out in matmul and batched FFT.

mod client;
mod fft;
pub(crate) mod kernels;
mod linalg;
mod ops;
mod signal;

pub use client::CpuClient;
