//! CPU convolution kernels.
//!
//! Direct convolution with implicit zero padding. The 2-D kernel slides the
//! stencil in the same orientation as it is stored (no flip), matching
//! symmetric blur stencils exactly.

/// Full 1-D convolution: `out.len() == signal.len() + kernel.len() - 1`
///
/// ```text
/// out[i] = Σ_j kernel[j] * signal[i - j]    for 0 <= i - j < len(signal)
/// ```
///
/// An empty operand contributes no taps, so the output is all zeros; the
/// length saturates at 0 when both operands together hold at most one sample.
pub fn conv1d_full_kernel(signal: &[f64], kernel: &[f64]) -> Vec<f64> {
    let out_len = (signal.len() + kernel.len()).saturating_sub(1);
    let mut out = vec![0.0; out_len];
    for (i, o) in out.iter_mut().enumerate() {
        let mut sum = 0.0;
        for (j, &k) in kernel.iter().enumerate() {
            if j <= i && i - j < signal.len() {
                sum += k * signal[i - j];
            }
        }
        *o = sum;
    }
    out
}

/// "Same" 2-D convolution of a `height x width` image with a `k x k` stencil.
///
/// Padding is `k / 2` on every side; taps that fall outside the image read 0.
///
/// ```text
/// out[y][x] = Σ_{ky,kx} image[y + ky - pad][x + kx - pad] * kernel[ky][kx]
/// ```
pub fn conv2d_same_kernel(
    image: &[f64],
    height: usize,
    width: usize,
    kernel: &[f64],
    k: usize,
) -> Vec<f64> {
    debug_assert_eq!(image.len(), height * width);
    debug_assert_eq!(kernel.len(), k * k);

    let pad = (k / 2) as isize;
    let mut out = vec![0.0; height * width];

    for oy in 0..height {
        for ox in 0..width {
            let mut sum = 0.0;
            for ky in 0..k {
                let iy = oy as isize + ky as isize - pad;
                if iy < 0 || iy >= height as isize {
                    continue;
                }
                let row = iy as usize * width;
                for kx in 0..k {
                    let ix = ox as isize + kx as isize - pad;
                    if ix >= 0 && (ix as usize) < width {
                        sum += image[row + ix as usize] * kernel[ky * k + kx];
                    }
                }
            }
            out[oy * width + ox] = sum;
        }
    }
    out
}

/// Normalized `size x size` Gaussian stencil, row-major
///
/// Parameters are validated by the caller (nonzero `size`, nonzero `sigma²`).
/// Even sizes center on `size / 2`.
pub fn gaussian_kernel(size: usize, sigma: f64) -> Vec<f64> {
    let center = (size / 2) as f64;
    let two_sigma_sq = 2.0 * sigma * sigma;

    let mut kernel = Vec::with_capacity(size * size);
    for y in 0..size {
        for x in 0..size {
            let dx = x as f64 - center;
            let dy = y as f64 - center;
            kernel.push((-(dx * dx + dy * dy) / two_sigma_sq).exp());
        }
    }

    let sum: f64 = kernel.iter().sum();
    for v in &mut kernel {
        *v /= sum;
    }
    kernel
}
