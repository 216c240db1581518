//! Convolution and image-processing algorithm contracts
//!
//! # Convolution Modes
//!
//! | Operation     | Mode | Output length / shape           | Borders       |
//! |---------------|------|---------------------------------|---------------|
//! | `convolve1d`  | full | `len(signal) + len(kernel) - 1` | zero-padded   |
//! | `convolve2d`  | same | shape of the image              | zero-padded   |
//!
//! # Pipelines
//!
//! ```text
//! gaussian_blur(image, size, sigma)
//!     = convolve2d(image, gaussian_kernel(size, sigma))
//! ```

use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// Default side length for [`SignalAlgorithms::gaussian_blur`]
pub const DEFAULT_BLUR_KERNEL_SIZE: usize = 5;

/// Default standard deviation for [`SignalAlgorithms::gaussian_blur`]
pub const DEFAULT_BLUR_SIGMA: f64 = 1.0;

/// Algorithmic contract for convolution and image operations
pub trait SignalAlgorithms {
    /// Full 1-D convolution with implicit zero padding
    ///
    /// ```text
    /// out[i] = Σ_j kernel[j] * signal[i - j]    for 0 <= i - j < len(signal)
    /// ```
    ///
    /// An empty operand contributes no taps, so the output is all zeros of
    /// length `len(signal) + len(kernel) - 1`, saturating at 0.
    fn convolve1d(&self, signal: &[f64], kernel: &[f64]) -> Vec<f64>;

    /// Normalized `size x size` Gaussian kernel
    ///
    /// Entry `(y, x)` is `exp(-(dx² + dy²) / (2σ²))` with `dx = x - size/2`,
    /// `dy = y - size/2`, divided by the sum of all entries.
    /// `size` must be nonzero and `sigma` finite and nonzero. Even sizes are
    /// accepted here, but cannot be used as a [`convolve2d`](Self::convolve2d)
    /// stencil. Only `σ²` enters the formula, so the sign of `sigma` is irrelevant.
    fn gaussian_kernel(&self, size: usize, sigma: f64) -> Result<Matrix>;

    /// "Same" 2-D convolution with implicit zero padding
    ///
    /// The kernel must be square with odd side `k`; padding is `k / 2`.
    fn convolve2d(&self, image: &Matrix, kernel: &Matrix) -> Result<Matrix>;

    /// Gaussian blur: kernel synthesis followed by [`convolve2d`](Self::convolve2d)
    ///
    /// `kernel_size` must be odd.
    fn gaussian_blur(&self, image: &Matrix, kernel_size: usize, sigma: f64) -> Result<Matrix>;

    /// Rotate about the image center by `angle_degrees`
    ///
    /// Each destination pixel is mapped back through a rotation by
    /// `-angle_degrees` and sampled with nearest-neighbor rounding. Pixels whose
    /// source falls outside the image are 0.
    fn rotate(&self, image: &Matrix, angle_degrees: f64) -> Matrix;

    /// 8-bit histogram equalization
    ///
    /// Pixels are rounded and clamped to `[0, 255]`, then remapped through
    /// `round((cdf[v] - cdf_min) * 255 / (total - cdf_min))`. When every pixel
    /// shares one level the clamped image is returned as-is.
    fn histogram_equalization(&self, image: &Matrix) -> Matrix;

    /// Trailing rolling mean; the first `window - 1` outputs are NaN
    ///
    /// `window` must be at least 1.
    fn rolling_mean(&self, series: &[f64], window: usize) -> Result<Vec<f64>>;
}

/// Validate Gaussian kernel parameters
pub fn validate_gaussian_params(size: usize, sigma: f64) -> Result<()> {
    if size == 0 {
        return Err(Error::invalid_argument("size", "kernel size must be positive"));
    }
    // sigma² must not underflow to zero
    if !sigma.is_finite() || sigma * sigma == 0.0 {
        return Err(Error::invalid_argument(
            "sigma",
            format!("sigma must be finite and nonzero, got {sigma}"),
        ));
    }
    Ok(())
}

/// Validate the side length of a blur stencil
pub fn validate_blur_size(kernel_size: usize) -> Result<()> {
    if kernel_size % 2 == 0 {
        return Err(Error::invalid_argument(
            "kernel_size",
            format!("blur kernel size must be odd, got {kernel_size}"),
        ));
    }
    Ok(())
}

/// Validate a 2-D convolution stencil, returning its side length
pub fn validate_conv2d_kernel(kernel: &Matrix) -> Result<usize> {
    let [kh, kw] = kernel.shape();
    if kh != kw {
        return Err(Error::invalid_argument(
            "kernel",
            format!("kernel must be square, got {kh}x{kw}"),
        ));
    }
    if kh % 2 == 0 {
        return Err(Error::invalid_argument(
            "kernel",
            format!("kernel side must be odd, got {kh}"),
        ));
    }
    Ok(kh)
}
