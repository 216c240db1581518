//! Shape validation for matrix operations

use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// Validate that `a @ b` is defined.
///
/// Returns `(m, k, n)` where `a` is `m x k` and `b` is `k x n`.
pub fn validate_matmul_shapes(a: &Matrix, b: &Matrix) -> Result<(usize, usize, usize)> {
    let [m, k] = a.shape();
    let [b_rows, n] = b.shape();
    if k != b_rows {
        return Err(Error::shape_mismatch(&[k, n], &[b_rows, n]));
    }
    Ok((m, k, n))
}

/// Validate that two matrices have identical shape for elementwise ops
pub fn validate_same_shape(a: &Matrix, b: &Matrix) -> Result<()> {
    if a.shape() != b.shape() {
        return Err(Error::shape_mismatch(&a.shape(), &b.shape()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_matmul_shapes() {
        let a = Matrix::zeros(2, 3);
        let b = Matrix::zeros(3, 4);
        assert_eq!(validate_matmul_shapes(&a, &b).unwrap(), (2, 3, 4));
        assert!(validate_matmul_shapes(&b, &a).is_err());
    }

    #[test]
    fn test_validate_same_shape() {
        assert!(validate_same_shape(&Matrix::zeros(2, 3), &Matrix::zeros(2, 3)).is_ok());
        assert!(validate_same_shape(&Matrix::zeros(2, 3), &Matrix::zeros(3, 2)).is_err());
    }
}
