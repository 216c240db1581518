//! Windowed accumulation kernels

/// Trailing rolling mean with a NaN warm-up prefix
///
/// `out[i]` is NaN for `i < window - 1` and otherwise the mean of
/// `series[i + 1 - window..=i]`. `window` must be at least 1.
pub fn rolling_mean_kernel(series: &[f64], window: usize) -> Vec<f64> {
    debug_assert!(window >= 1);

    let warmup = (window - 1).min(series.len());
    let mut out = Vec::with_capacity(series.len());
    out.resize(warmup, f64::NAN);

    let denom = window as f64;
    out.extend(series.windows(window).map(|w| w.iter().sum::<f64>() / denom));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rolling_mean_kernel() {
        let out = rolling_mean_kernel(&[1.0, 2.0, 3.0, 4.0, 5.0], 3);
        assert!(out[0].is_nan() && out[1].is_nan());
        assert_eq!(&out[2..], &[2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_rolling_mean_window_one_is_identity() {
        assert_eq!(rolling_mean_kernel(&[4.0, -1.0], 1), vec![4.0, -1.0]);
    }

    #[test]
    fn test_rolling_mean_window_longer_than_series() {
        let out = rolling_mean_kernel(&[1.0, 2.0], 5);
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|v| v.is_nan()));
    }
}
