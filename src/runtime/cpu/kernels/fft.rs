//! FFT kernels using recursive radix-2 Cooley-Tukey
//!
//! # Algorithm
//!
//! ```text
//! fft(x[N]):
//!     if N == 1: return x
//!     E = fft(even-indexed samples)
//!     O = fft(odd-indexed samples)
//!     for k in 0..N/2:
//!         t = exp(-2πi * k / N) * O[k]
//!         X[k]       = E[k] + t
//!         X[k + N/2] = E[k] - t
//! ```
//!
//! Recursion depth is `log2(N)` and each level allocates its two halves,
//! giving `O(N log N)` work. Callers validate the length first.

use crate::dtype::Complex128;
use std::f64::consts::PI;

/// Forward FFT of complex data
///
/// `input.len()` must be a power of two (1 included).
pub fn fft_complex(input: &[Complex128]) -> Vec<Complex128> {
    let n = input.len();
    debug_assert!(n > 0 && (n & (n - 1)) == 0, "N must be power of 2");

    if n == 1 {
        return vec![input[0]];
    }

    let even: Vec<Complex128> = input.iter().step_by(2).copied().collect();
    let odd: Vec<Complex128> = input.iter().skip(1).step_by(2).copied().collect();

    let even = fft_complex(&even);
    let odd = fft_complex(&odd);

    let half = n / 2;
    let mut output = vec![Complex128::ZERO; n];
    for k in 0..half {
        // Twiddle factor: W_N^k = exp(-2πi * k / N)
        let theta = -2.0 * PI * (k as f64) / (n as f64);
        let t = Complex128::from_polar(1.0, theta) * odd[k];
        output[k] = even[k] + t;
        output[k + half] = even[k] - t;
    }
    output
}

/// Forward FFT of a real signal (imaginary parts start at zero)
pub fn fft_real(input: &[f64]) -> Vec<Complex128> {
    let data: Vec<Complex128> = input.iter().map(|&re| Complex128::from(re)).collect();
    fft_complex(&data)
}

/// Forward FFT of many independent real signals
///
/// Signals are transformed on the rayon pool when the `rayon` feature is on.
#[cfg(feature = "rayon")]
pub fn fft_batch_real(signals: &[Vec<f64>]) -> Vec<Vec<Complex128>> {
    use rayon::prelude::*;

    signals.par_iter().map(|s| fft_real(s)).collect()
}

/// Forward FFT of many independent real signals
#[cfg(not(feature = "rayon"))]
pub fn fft_batch_real(signals: &[Vec<f64>]) -> Vec<Vec<Complex128>> {
    signals.iter().map(|s| fft_real(s)).collect()
}
