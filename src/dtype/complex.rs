//! Complex number type for the FFT kernels
//!
//! [`Complex128`] is `#[repr(C)]` with two `f64` fields in (re, im) order and
//! implements bytemuck's `Pod`, so a `&[Complex128]` can be viewed as an
//! interleaved `&[f64]` without copying.
//!
//! Complex arithmetic follows standard mathematical definitions:
//! - Addition: `(a+bi) + (c+di) = (a+c) + (b+d)i`
//! - Subtraction: `(a+bi) - (c+di) = (a-c) + (b-d)i`
//! - Multiplication: `(a+bi)(c+di) = (ac-bd) + (ad+bc)i`

use bytemuck::{Pod, Zeroable};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// 128-bit complex number with f64 real and imaginary parts
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Complex128 {
    /// Real part
    pub re: f64,
    /// Imaginary part
    pub im: f64,
}

impl Complex128 {
    /// Zero complex number
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

    /// One (real unit)
    pub const ONE: Self = Self { re: 1.0, im: 0.0 };

    /// Create a new complex number
    #[inline]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Create a complex number from polar form: r * e^(iθ)
    #[inline]
    pub fn from_polar(r: f64, theta: f64) -> Self {
        Self {
            re: r * theta.cos(),
            im: r * theta.sin(),
        }
    }

    /// Magnitude (absolute value): |z| = sqrt(re² + im²)
    #[inline]
    pub fn magnitude(self) -> f64 {
        self.re.hypot(self.im)
    }

    /// Complex conjugate: conj(a + bi) = a - bi
    #[inline]
    pub fn conj(self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }

    /// Multiply both parts by a real factor
    #[inline]
    pub fn scale(self, factor: f64) -> Self {
        Self {
            re: self.re * factor,
            im: self.im * factor,
        }
    }
}

impl Add for Complex128 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl Sub for Complex128 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            re: self.re - rhs.re,
            im: self.im - rhs.im,
        }
    }
}

impl Mul for Complex128 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self {
            re: self.re * rhs.re - self.im * rhs.im,
            im: self.re * rhs.im + self.im * rhs.re,
        }
    }
}

impl Neg for Complex128 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl fmt::Display for Complex128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im >= 0.0 {
            write!(f, "{}+{}i", self.re, self.im)
        } else {
            write!(f, "{}{}i", self.re, self.im)
        }
    }
}

impl From<f64> for Complex128 {
    #[inline]
    fn from(re: f64) -> Self {
        Self { re, im: 0.0 }
    }
}

impl From<(f64, f64)> for Complex128 {
    #[inline]
    fn from((re, im): (f64, f64)) -> Self {
        Self { re, im }
    }
}
