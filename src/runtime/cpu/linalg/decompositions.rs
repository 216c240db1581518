//! LU decomposition implementation

use super::super::CpuClient;
use crate::algorithm::linalg::{LuDecomposition, is_negligible_pivot, validate_square_matrix};
use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// LU decomposition without pivoting (Doolittle algorithm)
///
/// Row `i` of U is finished before column `i` of L, so every division uses
/// a pivot that is already final.
pub fn lu_decompose_impl(client: &CpuClient, a: &Matrix) -> Result<LuDecomposition> {
    let n = validate_square_matrix(a)?;
    let tolerance = client.pivot_tolerance();

    let mut l = Matrix::zeros(n, n);
    let mut u = Matrix::zeros(n, n);

    for i in 0..n {
        // Upper factor: row i, columns i..n
        for j in i..n {
            let mut sum = 0.0;
            for k in 0..i {
                sum += l[(i, k)] * u[(k, j)];
            }
            u[(i, j)] = a[(i, j)] - sum;
        }

        l[(i, i)] = 1.0;

        if i + 1 == n {
            break;
        }

        // Lower factor: column i, rows i+1..n
        let pivot = u[(i, i)];
        if is_negligible_pivot(pivot, tolerance) {
            tracing::debug!(index = i, pivot, tolerance, "lu_decompose: zero pivot");
            return Err(Error::ZeroPivot { index: i });
        }
        for r in (i + 1)..n {
            let mut sum = 0.0;
            for k in 0..i {
                sum += l[(r, k)] * u[(k, i)];
            }
            l[(r, i)] = (a[(r, i)] - sum) / pivot;
        }
    }

    Ok(LuDecomposition { l, u })
}
