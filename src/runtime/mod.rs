//! Runtime backends
//!
//! Only the CPU backend exists. A client owns a [`KernelConfig`] and
//! implements every algorithm contract from [`crate::ops`] and
//! [`crate::algorithm`].

mod config;
pub mod cpu;

pub use config::{DEFAULT_PARALLEL_THRESHOLD, DEFAULT_PIVOT_TOLERANCE, KernelConfig};
