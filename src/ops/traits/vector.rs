//! Vector operations trait.

use crate::error::Result;

/// Operations on plain `f64` vectors
pub trait VectorOps {
    /// Dot product; fails with `ShapeMismatch` when lengths differ
    fn dot(&self, a: &[f64], b: &[f64]) -> Result<f64>;

    /// Euclidean magnitude: `sqrt(Σ v_i²)`
    fn magnitude(&self, v: &[f64]) -> f64;

    /// Unit vector in the direction of `v`.
    ///
    /// A vector whose magnitude is exactly zero is returned unchanged
    /// rather than divided by zero.
    fn normalize(&self, v: &[f64]) -> Vec<f64>;
}
