//! Convolution and image-processing implementations for the CPU client

use super::{CpuClient, kernels};
use crate::algorithm::signal::{
    SignalAlgorithms, validate_blur_size, validate_conv2d_kernel, validate_gaussian_params,
};
use crate::error::{Error, Result};
use crate::matrix::Matrix;

impl SignalAlgorithms for CpuClient {
    fn convolve1d(&self, signal: &[f64], kernel: &[f64]) -> Vec<f64> {
        kernels::conv1d_full_kernel(signal, kernel)
    }

    fn gaussian_kernel(&self, size: usize, sigma: f64) -> Result<Matrix> {
        validate_gaussian_params(size, sigma)?;
        tracing::trace!(size, sigma, "synthesizing gaussian kernel");
        Matrix::from_vec(kernels::gaussian_kernel(size, sigma), size, size)
    }

    fn convolve2d(&self, image: &Matrix, kernel: &Matrix) -> Result<Matrix> {
        let k = validate_conv2d_kernel(kernel)?;
        let [height, width] = image.shape();
        let out = kernels::conv2d_same_kernel(image.as_slice(), height, width, kernel.as_slice(), k);
        Matrix::from_vec(out, height, width)
    }

    fn gaussian_blur(&self, image: &Matrix, kernel_size: usize, sigma: f64) -> Result<Matrix> {
        validate_blur_size(kernel_size)?;
        let kernel = self.gaussian_kernel(kernel_size, sigma)?;
        self.convolve2d(image, &kernel)
    }

    fn rotate(&self, image: &Matrix, angle_degrees: f64) -> Matrix {
        let [height, width] = image.shape();
        let out =
            kernels::rotate_nearest_kernel(image.as_slice(), height, width, angle_degrees.to_radians());
        Matrix::from_vec_unchecked(out, height, width)
    }

    fn histogram_equalization(&self, image: &Matrix) -> Matrix {
        let [height, width] = image.shape();
        let out = kernels::histogram_equalize_kernel(image.as_slice());
        if out.is_empty() {
            return image.clone();
        }
        Matrix::from_vec_unchecked(out, height, width)
    }

    fn rolling_mean(&self, series: &[f64], window: usize) -> Result<Vec<f64>> {
        if window == 0 {
            return Err(Error::invalid_argument("window", "window must be at least 1"));
        }
        Ok(kernels::rolling_mean_kernel(series, window))
    }
}
