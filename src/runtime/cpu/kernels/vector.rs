//! Vector reduction kernels

/// Dot product of two equal-length slices
#[inline]
pub fn dot_kernel(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Σ v_i²
#[inline]
pub fn sum_of_squares_kernel(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum()
}
