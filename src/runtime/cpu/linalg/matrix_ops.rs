//! Basic matrix operations (inverse, det, trace)

use super::super::CpuClient;
use super::super::kernels::{EliminationMode, gaussian_eliminate};
use crate::algorithm::linalg::validate_square_matrix;
use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// Matrix inverse via Gauss-Jordan elimination on `[A | I]`
pub fn inverse_impl(client: &CpuClient, a: &Matrix) -> Result<Matrix> {
    let n = validate_square_matrix(a)?;
    let width = 2 * n;

    // [A | I]
    let mut aug = vec![0.0; n * width];
    for i in 0..n {
        aug[i * width..i * width + n].copy_from_slice(a.row(i));
        aug[i * width + n + i] = 1.0;
    }

    gaussian_eliminate(
        &mut aug,
        n,
        width,
        EliminationMode::GaussJordan,
        client.pivot_tolerance(),
    )
    .map_err(|p| {
        tracing::debug!(
            column = p.column,
            magnitude = p.magnitude,
            "inverse: pivot below tolerance"
        );
        Error::SingularMatrix
    })?;

    // Right half is A^-1
    let mut inv = Vec::with_capacity(n * n);
    for i in 0..n {
        inv.extend_from_slice(&aug[i * width + n..(i + 1) * width]);
    }
    Matrix::from_vec(inv, n, n)
}

/// Determinant via cofactor expansion along the first row
pub fn det_impl(a: &Matrix) -> Result<f64> {
    validate_square_matrix(a)?;
    cofactor_det(a)
}

fn cofactor_det(a: &Matrix) -> Result<f64> {
    match a.rows() {
        0 => Ok(1.0),
        1 => Ok(a[(0, 0)]),
        2 => Ok(a[(0, 0)] * a[(1, 1)] - a[(0, 1)] * a[(1, 0)]),
        n => (0..n)
            .map(|col| -> Result<f64> {
                let sign = if col % 2 == 0 { 1.0 } else { -1.0 };
                Ok(sign * a[(0, col)] * cofactor_det(&a.minor(0, col)?)?)
            })
            .sum(),
    }
}

/// Trace: sum of diagonal elements
pub fn trace_impl(a: &Matrix) -> Result<f64> {
    let n = validate_square_matrix(a)?;
    Ok((0..n).map(|i| a[(i, i)]).sum())
}
