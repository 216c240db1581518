//! Dense matrix operations trait.

use crate::error::Result;
use crate::matrix::Matrix;

/// Dense matrix operations
///
/// The identity matrix is built directly with [`Matrix::identity`].
pub trait MatrixOps {
    /// Matrix multiplication: `a @ b`
    ///
    /// Requires `cols(a) == rows(b)`; the result is `rows(a) x cols(b)` with
    /// entry `(i, j) = Σ_k a[i][k] * b[k][j]`.
    fn matmul(&self, a: &Matrix, b: &Matrix) -> Result<Matrix>;

    /// Elementwise sum; both operands must have identical shape
    fn add(&self, a: &Matrix, b: &Matrix) -> Result<Matrix>;

    /// Multiply every entry by `scalar`
    fn scalar_mul(&self, a: &Matrix, scalar: f64) -> Matrix;

    /// Transpose: `rows x cols` becomes `cols x rows`
    fn transpose(&self, a: &Matrix) -> Matrix;
}
