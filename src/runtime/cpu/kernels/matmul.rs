//! Matrix multiplication kernels
//!
//! Both kernels use the i-k-j loop order so the inner loop streams through
//! contiguous rows of `b` and `out`. The parallel kernel hands each output
//! row to one rayon task and runs the exact same inner loops, so the two
//! paths produce bit-identical results.

/// Serial matmul: `out = a @ b`
///
/// # Arguments
/// * `a` - `m x k` row-major
/// * `b` - `k x n` row-major
/// * `out` - `m x n` row-major, overwritten
pub fn matmul_kernel(a: &[f64], b: &[f64], out: &mut [f64], m: usize, k: usize, n: usize) {
    debug_assert_eq!(a.len(), m * k);
    debug_assert_eq!(b.len(), k * n);
    debug_assert_eq!(out.len(), m * n);

    if n == 0 {
        return;
    }
    for (i, out_row) in out.chunks_mut(n).enumerate() {
        matmul_row(&a[i * k..(i + 1) * k], b, out_row, n);
    }
}

/// Row-parallel matmul on the rayon pool
#[cfg(feature = "rayon")]
pub fn matmul_parallel_kernel(
    a: &[f64],
    b: &[f64],
    out: &mut [f64],
    m: usize,
    k: usize,
    n: usize,
) {
    use rayon::prelude::*;

    debug_assert_eq!(a.len(), m * k);
    debug_assert_eq!(b.len(), k * n);
    debug_assert_eq!(out.len(), m * n);

    if n == 0 {
        return;
    }
    out.par_chunks_mut(n)
        .enumerate()
        .for_each(|(i, out_row)| matmul_row(&a[i * k..(i + 1) * k], b, out_row, n));
}

#[inline]
fn matmul_row(a_row: &[f64], b: &[f64], out_row: &mut [f64], n: usize) {
    out_row.fill(0.0);
    for (kk, &a_val) in a_row.iter().enumerate() {
        let b_row = &b[kk * n..(kk + 1) * n];
        for (o, &b_val) in out_row.iter_mut().zip(b_row) {
            *o += a_val * b_val;
        }
    }
}
