//! Numerical configuration shared by every kernel a client dispatches
//!
//! [`KernelConfig`] carries the pivot tolerance used by Gaussian elimination
//! and LU decomposition, and the problem size above which the CPU backend
//! fans work out to rayon.

use crate::error::{Error, Result};

/// Pivot magnitude below which a matrix is treated as singular
pub const DEFAULT_PIVOT_TOLERANCE: f64 = 1e-10;

/// Output element count at which matmul switches to the row-parallel path
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64 * 64;

/// Kernel configuration
///
/// ```
/// use numkern::runtime::KernelConfig;
///
/// let config = KernelConfig::default().with_pivot_tolerance(1e-12).unwrap();
/// assert_eq!(config.pivot_tolerance, 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelConfig {
    /// Pivots with `|p| < pivot_tolerance` fail with a singularity error
    pub pivot_tolerance: f64,
    /// Minimum `rows * cols` of a matmul result before rows are split across threads
    pub parallel_threshold: usize,
}

impl KernelConfig {
    /// Default configuration: tolerance `1e-10`, parallel above 64x64 outputs
    pub const DEFAULT: Self = Self {
        pivot_tolerance: DEFAULT_PIVOT_TOLERANCE,
        parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
    };

    /// Never parallelize
    pub const SERIAL: Self = Self {
        pivot_tolerance: DEFAULT_PIVOT_TOLERANCE,
        parallel_threshold: usize::MAX,
    };

    /// Override the pivot tolerance.
    ///
    /// The tolerance must be finite and non-negative.
    pub fn with_pivot_tolerance(mut self, tolerance: f64) -> Result<Self> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(Error::invalid_argument(
                "pivot_tolerance",
                format!("must be finite and non-negative, got {tolerance}"),
            ));
        }
        self.pivot_tolerance = tolerance;
        Ok(self)
    }

    /// Override the parallel threshold
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
