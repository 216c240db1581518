//! Linear system solver (Ax = b)

use super::super::CpuClient;
use super::super::kernels::{EliminationMode, back_substitute, gaussian_eliminate};
use crate::algorithm::linalg::{validate_rhs, validate_square_matrix};
use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// Solve `Ax = b` by forward elimination on `[A | b]` and back-substitution
pub fn solve_impl(client: &CpuClient, a: &Matrix, b: &[f64]) -> Result<Vec<f64>> {
    let n = validate_square_matrix(a)?;
    validate_rhs(b, n)?;

    let width = n + 1;
    let mut aug = augment_with_column(a, b);

    gaussian_eliminate(
        &mut aug,
        n,
        width,
        EliminationMode::Forward,
        client.pivot_tolerance(),
    )
    .map_err(|p| {
        tracing::debug!(
            column = p.column,
            magnitude = p.magnitude,
            "solve: pivot below tolerance"
        );
        Error::NoUniqueSolution
    })?;

    Ok(back_substitute(&aug, n, width))
}

/// Build the `n x (n + 1)` buffer `[A | b]`
fn augment_with_column(a: &Matrix, b: &[f64]) -> Vec<f64> {
    let n = a.rows();
    let mut aug = Vec::with_capacity(n * (n + 1));
    for (i, &rhs) in b.iter().enumerate() {
        aug.extend_from_slice(a.row(i));
        aug.push(rhs);
    }
    aug
}
