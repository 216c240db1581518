//! Common test utilities
#![allow(dead_code)]

use numkern::matrix::Matrix;
use numkern::runtime::cpu::CpuClient;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Create a CPU client with the default configuration
pub fn create_cpu_client() -> CpuClient {
    CpuClient::new()
}

/// Seeded RNG so randomized tests are reproducible
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Assert two matrices have the same shape and are elementwise close
pub fn assert_matrix_close(a: &Matrix, b: &Matrix, atol: f64, msg: &str) {
    assert_eq!(a.shape(), b.shape(), "{}: shape mismatch", msg);
    assert_allclose_f64(a.as_slice(), b.as_slice(), 0.0, atol, msg);
}

/// Random `rows x cols` matrix with entries in `[-1, 1)`
pub fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize) -> Matrix {
    Matrix::from_fn(rows, cols, |_, _| rng.random_range(-1.0..1.0))
}

/// Random strictly diagonally dominant `n x n` matrix.
///
/// Nonsingular, well conditioned, and every leading principal minor is
/// nonsingular, so it is safe for inverse, solve and unpivoted LU.
pub fn random_diagonally_dominant(rng: &mut StdRng, n: usize) -> Matrix {
    let mut m = random_matrix(rng, n, n);
    for i in 0..n {
        let off: f64 = (0..n).filter(|&j| j != i).map(|j| m[(i, j)].abs()).sum();
        m[(i, i)] = off + 1.0 + rng.random_range(0.0..1.0);
    }
    m
}

/// Random vector with entries in `[-1, 1)`
pub fn random_vector(rng: &mut StdRng, n: usize) -> Vec<f64> {
    (0..n).map(|_| rng.random_range(-1.0..1.0)).collect()
}
