//! Linear algebra algorithm trait definitions

use super::decompositions::LuDecomposition;
use crate::error::Result;
use crate::matrix::Matrix;

/// Algorithmic contract for linear algebra operations
///
/// # Gaussian Elimination
///
/// `inverse` and `solve` share one elimination primitive:
///
/// ```text
/// for col in 0..n:
///     p = argmax_{r in col..n} |aug[r][col]|      // partial pivoting
///     swap rows p and col
///     if |aug[col][col]| < tolerance: fail
///     eliminate column col from the other rows
/// ```
///
/// Inversion eliminates above and below the pivot (Gauss-Jordan) on
/// `[A | I]` and returns the right half. Solving eliminates below the pivot
/// only on `[A | b]` and finishes with back-substitution:
///
/// ```text
/// x[i] = (aug[i][n] - Σ_{j>i} aug[i][j] * x[j]) / aug[i][i]
/// ```
///
/// The tolerance comes from the client's [`crate::runtime::KernelConfig`].
pub trait LinearAlgebraAlgorithms {
    /// Matrix inverse via Gauss-Jordan elimination on `[A | I]`
    ///
    /// Fails with `SingularMatrix` when any pivot is below tolerance.
    fn inverse(&self, a: &Matrix) -> Result<Matrix>;

    /// Determinant via cofactor expansion along the first row
    ///
    /// ```text
    /// det(A) = Σ_col (-1)^col * A[0][col] * det(minor(A, 0, col))
    /// ```
    ///
    /// `1x1` and `2x2` matrices are evaluated directly. Cost is `O(n!)`.
    fn det(&self, a: &Matrix) -> Result<f64>;

    /// Doolittle LU decomposition without pivoting: A = LU
    ///
    /// ```text
    /// U[i][j] = A[i][j] - Σ_{k<i} L[i][k] * U[k][j]            for i <= j
    /// L[i][j] = (A[i][j] - Σ_{k<j} L[i][k] * U[k][j]) / U[j][j]  for i > j
    /// ```
    ///
    /// Fails with `ZeroPivot` when `|U[j][j]|` is below tolerance while
    /// computing column `j` of L.
    fn lu_decompose(&self, a: &Matrix) -> Result<LuDecomposition>;

    /// Solve `Ax = b` by forward elimination on `[A | b]` and back-substitution
    ///
    /// Fails with `NoUniqueSolution` when any pivot is below tolerance.
    fn solve(&self, a: &Matrix, b: &[f64]) -> Result<Vec<f64>>;

    /// Sum of the diagonal of a square matrix
    fn trace(&self, a: &Matrix) -> Result<f64>;
}
