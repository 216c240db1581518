//! Helper functions for linear algebra operations
//!
//! Validation utilities and common helper functions used across backends.

use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// Validate matrix is square, returning its order
pub fn validate_square_matrix(a: &Matrix) -> Result<usize> {
    let [m, n] = a.shape();
    if m != n {
        return Err(Error::shape_mismatch(&[m, m], &[m, n]));
    }
    Ok(n)
}

/// Validate the right-hand side of an `n x n` system
pub fn validate_rhs(b: &[f64], n: usize) -> Result<()> {
    if b.len() != n {
        return Err(Error::shape_mismatch(&[n], &[b.len()]));
    }
    Ok(())
}

/// True when `pivot` is too small to divide by under `tolerance`
#[inline]
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn is_negligible_pivot(pivot: f64, tolerance: f64) -> bool {
    // NaN pivots are treated as singular too
    !(pivot.abs() >= tolerance)
}
