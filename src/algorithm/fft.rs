//! FFT algorithm contracts
//!
//! # Algorithm: Recursive Radix-2 Cooley-Tukey
//!
//! ```text
//! fft(x[N]):
//!     if N == 1: return [x0 + 0i]
//!     E = fft(x[0], x[2], x[4], ...)
//!     O = fft(x[1], x[3], x[5], ...)
//!     for k in 0..N/2:
//!         W = exp(-2πi * k / N)                // twiddle factor
//!         X[k]       = E[k] + W * O[k]
//!         X[k + N/2] = E[k] - W * O[k]
//!     return X
//! ```
//!
//! Only lengths that are exactly 1 or a power of two are accepted; any other
//! length fails with [`Error::InvalidLength`].
//!
//! # Inverse transforms
//!
//! Two inverses are offered:
//!
//! | Operation      | Definition                                   | Roundtrip            |
//! |----------------|----------------------------------------------|----------------------|
//! | `ifft`         | `fft(spectrum.real).real / N`                | real input only      |
//! | `ifft_complex` | `conj(fft(conj(X))) / N`                     | `ifft_complex(fft(x)) == x` |
//!
//! `ifft` keeps the long-standing real-channel behavior: the imaginary part of
//! the spectrum is ignored. Use `ifft_complex` for a true inverse.

use crate::dtype::Complex128;
use crate::error::{Error, Result};

// ============================================================================
// Spectrum
// ============================================================================

/// Complex spectrum stored as parallel real and imaginary coefficient vectors
///
/// Bin `k` holds `real[k] + i * imag[k]`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Spectrum {
    /// Real parts, indexed by frequency bin
    pub real: Vec<f64>,
    /// Imaginary parts, indexed by frequency bin
    pub imag: Vec<f64>,
}

impl Spectrum {
    /// Create a spectrum, checking both parts have the same length
    pub fn new(real: Vec<f64>, imag: Vec<f64>) -> Result<Self> {
        if real.len() != imag.len() {
            return Err(Error::shape_mismatch(&[real.len()], &[imag.len()]));
        }
        Ok(Self { real, imag })
    }

    /// Split complex values into real and imaginary vectors
    ///
    /// The input is read as its interleaved `[re, im, re, im, ...]` `f64` view.
    pub fn from_complex(values: &[Complex128]) -> Self {
        let interleaved: &[f64] = bytemuck::cast_slice(values);
        let (real, imag) = interleaved
            .chunks_exact(2)
            .map(|pair| (pair[0], pair[1]))
            .unzip();
        Self { real, imag }
    }

    /// Zip the parts back into complex values.
    ///
    /// If the parts differ in length the shorter one bounds the output.
    pub fn to_complex(&self) -> Vec<Complex128> {
        self.real
            .iter()
            .zip(&self.imag)
            .map(|(&re, &im)| Complex128::new(re, im))
            .collect()
    }

    /// Number of frequency bins
    #[inline]
    pub fn len(&self) -> usize {
        self.real.len()
    }

    /// True when the spectrum has no bins
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.real.is_empty()
    }

    /// Magnitude of each bin
    pub fn magnitudes(&self) -> Vec<f64> {
        self.real
            .iter()
            .zip(&self.imag)
            .map(|(re, im)| re.hypot(*im))
            .collect()
    }

    /// Elementwise sum of two spectra of equal length
    pub fn add(&self, other: &Spectrum) -> Result<Spectrum> {
        if self.len() != other.len() {
            return Err(Error::shape_mismatch(&[self.len()], &[other.len()]));
        }
        Ok(Spectrum {
            real: self.real.iter().zip(&other.real).map(|(a, b)| a + b).collect(),
            imag: self.imag.iter().zip(&other.imag).map(|(a, b)| a + b).collect(),
        })
    }

    fn validate_parts(&self) -> Result<()> {
        if self.real.len() != self.imag.len() {
            return Err(Error::shape_mismatch(&[self.real.len()], &[self.imag.len()]));
        }
        Ok(())
    }
}

// ============================================================================
// FFT Algorithm Trait
// ============================================================================

/// Algorithmic contract for FFT operations
pub trait FftAlgorithms {
    /// Forward FFT of a real signal
    ///
    /// Output has the same length as the input. Fails with `InvalidLength`
    /// unless `len(x)` is 1 or a power of two.
    fn fft(&self, x: &[f64]) -> Result<Spectrum>;

    /// Real-channel inverse: forward transform of `spectrum.real`, scaled by `1/N`
    ///
    /// Returns the real part of the result. The imaginary channel of the
    /// input does not participate.
    fn ifft(&self, spectrum: &Spectrum) -> Result<Vec<f64>>;

    /// True complex inverse FFT: `conj(fft(conj(X))) / N`
    fn ifft_complex(&self, spectrum: &Spectrum) -> Result<Spectrum>;

    /// Forward FFT of many independent signals
    ///
    /// Each signal must individually satisfy the length rule of [`fft`](Self::fft).
    fn fft_batch(&self, signals: &[Vec<f64>]) -> Result<Vec<Spectrum>>;
}

// ============================================================================
// Validation
// ============================================================================

/// Check if n is a power of 2 (1 counts, 0 does not)
#[inline]
pub fn is_power_of_two(n: usize) -> bool {
    n > 0 && (n & (n - 1)) == 0
}

/// Validate an FFT length
pub fn validate_fft_size(n: usize, op: &'static str) -> Result<()> {
    if !is_power_of_two(n) {
        tracing::debug!(op, len = n, "rejected non power-of-two FFT length");
        return Err(Error::InvalidLength { len: n, op });
    }
    Ok(())
}

/// Validate a spectrum before inverting it
pub fn validate_spectrum(spectrum: &Spectrum, op: &'static str) -> Result<()> {
    spectrum.validate_parts()?;
    validate_fft_size(spectrum.len(), op)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_power_of_two() {
        assert!(!is_power_of_two(0));
        assert!(is_power_of_two(1));
        assert!(is_power_of_two(2));
        assert!(!is_power_of_two(3));
        assert!(is_power_of_two(1024));
        assert!(!is_power_of_two(1000));
    }

    #[test]
    fn test_validate_fft_size() {
        assert!(validate_fft_size(8, "fft").is_ok());
        assert_eq!(
            validate_fft_size(6, "fft"),
            Err(Error::InvalidLength { len: 6, op: "fft" })
        );
        assert!(validate_fft_size(0, "fft").is_err());
    }

    #[test]
    fn test_spectrum_new_rejects_mismatch() {
        assert!(Spectrum::new(vec![1.0, 2.0], vec![0.0]).is_err());
        let s = Spectrum::new(vec![3.0, 0.0], vec![4.0, 0.0]).unwrap();
        assert_eq!(s.magnitudes(), vec![5.0, 0.0]);
    }

    #[test]
    fn test_spectrum_complex_conversion() {
        let values = [Complex128::new(1.0, -1.0), Complex128::new(2.0, 0.5)];
        let s = Spectrum::from_complex(&values);
        assert_eq!(s.real, vec![1.0, 2.0]);
        assert_eq!(s.imag, vec![-1.0, 0.5]);
        assert_eq!(s.to_complex(), values.to_vec());
    }

    #[test]
    fn test_spectrum_from_complex_empty() {
        let s = Spectrum::from_complex(&[]);
        assert!(s.is_empty());
        assert!(s.imag.is_empty());
    }

    #[test]
    fn test_validate_spectrum() {
        let mismatched = Spectrum {
            real: vec![1.0, 2.0],
            imag: vec![0.0],
        };
        assert!(matches!(
            validate_spectrum(&mismatched, "ifft"),
            Err(Error::ShapeMismatch { .. })
        ));
        let bad_len = Spectrum::new(vec![0.0; 3], vec![0.0; 3]).unwrap();
        assert!(matches!(
            validate_spectrum(&bad_len, "ifft"),
            Err(Error::InvalidLength { len: 3, .. })
        ));
    }
}
