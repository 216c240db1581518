//! FFT algorithm implementation for CPU runtime
//!
//! This module implements the [`FftAlgorithms`] trait for [`CpuClient`]
//! using the recursive radix-2 kernel in `kernels::fft`.

use super::{CpuClient, kernels};
use crate::algorithm::fft::{FftAlgorithms, Spectrum, validate_fft_size, validate_spectrum};
use crate::error::Result;

impl FftAlgorithms for CpuClient {
    fn fft(&self, x: &[f64]) -> Result<Spectrum> {
        validate_fft_size(x.len(), "fft")?;
        Ok(Spectrum::from_complex(&kernels::fft_real(x)))
    }

    fn ifft(&self, spectrum: &Spectrum) -> Result<Vec<f64>> {
        validate_spectrum(spectrum, "ifft")?;

        let n = spectrum.len();
        let scale = 1.0 / n as f64;
        let transformed = kernels::fft_real(&spectrum.real);
        Ok(transformed.iter().map(|c| c.re * scale).collect())
    }

    fn ifft_complex(&self, spectrum: &Spectrum) -> Result<Spectrum> {
        validate_spectrum(spectrum, "ifft_complex")?;

        // ifft(X) = conj(fft(conj(X))) / N
        let n = spectrum.len();
        let scale = 1.0 / n as f64;
        let conjugated: Vec<_> = spectrum.to_complex().into_iter().map(|c| c.conj()).collect();
        let transformed: Vec<_> = kernels::fft_complex(&conjugated)
            .into_iter()
            .map(|c| c.conj().scale(scale))
            .collect();
        Ok(Spectrum::from_complex(&transformed))
    }

    fn fft_batch(&self, signals: &[Vec<f64>]) -> Result<Vec<Spectrum>> {
        for signal in signals {
            validate_fft_size(signal.len(), "fft_batch")?;
        }
        Ok(kernels::fft_batch_real(signals)
            .iter()
            .map(|values| Spectrum::from_complex(values))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_fft_rejects_non_power_of_two() {
        let client = CpuClient::new();
        assert_eq!(
            client.fft(&[1.0, 2.0, 3.0]),
            Err(Error::InvalidLength { len: 3, op: "fft" })
        );
        assert!(client.fft(&[]).is_err());
    }

    #[test]
    fn test_fft_batch_reports_first_bad_signal() {
        let client = CpuClient::new();
        let signals = vec![vec![1.0; 4], vec![1.0; 5], vec![1.0; 6]];
        assert_eq!(
            client.fft_batch(&signals),
            Err(Error::InvalidLength {
                len: 5,
                op: "fft_batch"
            })
        );
    }

    #[test]
    fn test_ifft_ignores_imaginary_channel() {
        let client = CpuClient::new();
        let a = Spectrum::new(vec![4.0, 0.0, 0.0, 0.0], vec![0.0; 4]).unwrap();
        let b = Spectrum::new(vec![4.0, 0.0, 0.0, 0.0], vec![1.0, -2.0, 3.0, 0.5]).unwrap();
        assert_eq!(client.ifft(&a).unwrap(), client.ifft(&b).unwrap());
    }
}
