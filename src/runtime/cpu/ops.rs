//! Matrix and vector operation implementations for the CPU client

use super::{CpuClient, kernels};
use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::ops::{MatrixOps, VectorOps, validate_matmul_shapes, validate_same_shape};

impl MatrixOps for CpuClient {
    fn matmul(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        let (m, k, n) = validate_matmul_shapes(a, b)?;
        let mut out = Matrix::zeros(m, n);

        #[cfg(feature = "rayon")]
        if m > 1 && m * n >= self.config().parallel_threshold {
            tracing::trace!(m, k, n, "matmul: row-parallel dispatch");
            kernels::matmul_parallel_kernel(a.as_slice(), b.as_slice(), out.as_mut_slice(), m, k, n);
            return Ok(out);
        }

        kernels::matmul_kernel(a.as_slice(), b.as_slice(), out.as_mut_slice(), m, k, n);
        Ok(out)
    }

    fn add(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        validate_same_shape(a, b)?;
        let data = a
            .as_slice()
            .iter()
            .zip(b.as_slice())
            .map(|(x, y)| x + y)
            .collect();
        Matrix::from_vec(data, a.rows(), a.cols())
    }

    fn scalar_mul(&self, a: &Matrix, scalar: f64) -> Matrix {
        let mut out = a.clone();
        for v in out.as_mut_slice() {
            *v *= scalar;
        }
        out
    }

    fn transpose(&self, a: &Matrix) -> Matrix {
        Matrix::from_fn(a.cols(), a.rows(), |i, j| a[(j, i)])
    }
}

impl VectorOps for CpuClient {
    fn dot(&self, a: &[f64], b: &[f64]) -> Result<f64> {
        if a.len() != b.len() {
            return Err(Error::shape_mismatch(&[a.len()], &[b.len()]));
        }
        Ok(kernels::dot_kernel(a, b))
    }

    fn magnitude(&self, v: &[f64]) -> f64 {
        kernels::sum_of_squares_kernel(v).sqrt()
    }

    fn normalize(&self, v: &[f64]) -> Vec<f64> {
        let mag = self.magnitude(v);
        if mag == 0.0 {
            return v.to_vec();
        }
        v.iter().map(|x| x / mag).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matmul_shape_mismatch() {
        let client = CpuClient::new();
        let err = client
            .matmul(&Matrix::zeros(2, 3), &Matrix::zeros(2, 3))
            .unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { .. }));
    }

    #[test]
    fn test_transpose_shape() {
        let client = CpuClient::new();
        let a = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
        let t = client.transpose(&a);
        assert_eq!(t.shape(), [3, 2]);
        assert_eq!(t.as_slice(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    }

    #[test]
    fn test_normalize_zero_vector() {
        let client = CpuClient::new();
        assert_eq!(client.normalize(&[0.0, 0.0, 0.0]), vec![0.0, 0.0, 0.0]);
    }
}
