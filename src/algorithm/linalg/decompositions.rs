//! Decomposition result types for linear algebra operations

use crate::matrix::Matrix;

/// LU decomposition result: A = LU
///
/// Doolittle factorization without pivoting. L is lower triangular with a
/// unit diagonal, U is upper triangular. Both are returned as full `n x n`
/// matrices with explicit zeros outside their triangles.
#[derive(Debug, Clone, PartialEq)]
pub struct LuDecomposition {
    /// Lower triangular factor with unit diagonal
    pub l: Matrix,

    /// Upper triangular factor
    pub u: Matrix,
}
