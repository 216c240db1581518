//! Gaussian elimination with partial pivoting on augmented matrices
//!
//! The augmented buffer is `n` rows of `width` columns, row-major, where the
//! left `n x n` block is the coefficient matrix and the remaining columns are
//! the right-hand sides (`I` for inversion, `b` for a linear solve).
//!
//! ```text
//! for col in 0..n:
//!     p = argmax_{r in col..n} |aug[r][col]|
//!     swap(aug[p], aug[col])
//!     if |aug[col][col]| < tolerance: return SingularPivot
//!     GaussJordan: aug[col] /= pivot; clear column col in every other row
//!     Forward:     clear column col in rows col+1..n
//! ```

use crate::algorithm::linalg::is_negligible_pivot;

/// How far elimination reduces the augmented matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EliminationMode {
    /// Reduce to `[I | X]`; the right block is the solution directly
    GaussJordan,
    /// Reduce the left block to upper triangular form only
    Forward,
}

/// Pivot that fell below tolerance during elimination
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SingularPivot {
    /// Column being eliminated when the pivot was rejected
    pub column: usize,
    /// Magnitude of the best available pivot in that column
    pub magnitude: f64,
}

/// Eliminate the `n x n` coefficient block of `aug` in place.
///
/// Returns the offending pivot when the matrix is singular under `tolerance`.
pub fn gaussian_eliminate(
    aug: &mut [f64],
    n: usize,
    width: usize,
    mode: EliminationMode,
    tolerance: f64,
) -> Result<(), SingularPivot> {
    debug_assert!(width >= n);
    debug_assert_eq!(aug.len(), n * width);

    for col in 0..n {
        // Partial pivoting: largest magnitude in column col, rows col..n
        let mut pivot_row = col;
        let mut max_val = aug[col * width + col].abs();
        for row in (col + 1)..n {
            let val = aug[row * width + col].abs();
            if val > max_val {
                max_val = val;
                pivot_row = row;
            }
        }

        if pivot_row != col {
            for j in 0..width {
                aug.swap(col * width + j, pivot_row * width + j);
            }
        }

        let pivot = aug[col * width + col];
        if is_negligible_pivot(pivot, tolerance) {
            return Err(SingularPivot {
                column: col,
                magnitude: pivot.abs(),
            });
        }

        match mode {
            EliminationMode::GaussJordan => {
                for j in 0..width {
                    aug[col * width + j] /= pivot;
                }
                for row in (0..n).filter(|&r| r != col) {
                    let factor = aug[row * width + col];
                    if factor == 0.0 {
                        continue;
                    }
                    for j in 0..width {
                        aug[row * width + j] -= factor * aug[col * width + j];
                    }
                }
            }
            EliminationMode::Forward => {
                for row in (col + 1)..n {
                    let factor = aug[row * width + col] / pivot;
                    if factor == 0.0 {
                        continue;
                    }
                    for j in col..width {
                        aug[row * width + j] -= factor * aug[col * width + j];
                    }
                }
            }
        }
    }

    Ok(())
}

/// Back-substitution on a forward-eliminated `[U | b]` buffer.
///
/// `b` is the column at index `n`:
///
/// ```text
/// x[i] = (aug[i][n] - Σ_{j>i} aug[i][j] * x[j]) / aug[i][i]
/// ```
pub fn back_substitute(aug: &[f64], n: usize, width: usize) -> Vec<f64> {
    debug_assert!(width > n);
    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let mut s = 0.0;
        for j in (i + 1)..n {
            s += aug[i * width + j] * x[j];
        }
        x[i] = (aug[i * width + n] - s) / aug[i * width + i];
    }
    x
}
