//! The complex value type
//!
//! `Complex` is a plain `Copy` value holding `re + im·i` as two `f64`s.
//! Nothing is normalised: a zero imaginary part stays a complex value, and
//! NaN or infinite parts are carried as-is.

/// Complex number `re + im·i`
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Complex {
    /// Real part
    pub re: f64,
    /// Imaginary part
    pub im: f64,
}

impl Complex {
    pub const ZERO: Complex = Complex { re: 0.0, im: 0.0 };
    pub const ONE: Complex = Complex { re: 1.0, im: 0.0 };

    #[inline]
    pub const fn new(re: f64, im: f64) -> Self {
        Complex { re, im }
    }

    /// Complex value with a zero imaginary part
    #[inline]
    pub const fn from_real(re: f64) -> Self {
        Complex { re, im: 0.0 }
    }

    /// Overwrite both parts. Any `f64` is accepted.
    #[inline]
    pub fn set(&mut self, re: f64, im: f64) {
        self.re = re;
        self.im = im;
    }

    /// Assign a scalar: `re` takes the value and `im` is reset to exactly zero
    #[inline]
    pub fn set_scalar(&mut self, re: f64) {
        self.set(re, 0.0);
    }

    /// Modulus `sqrt(re² + im²)`, computed without intermediate overflow
    #[inline]
    pub fn abs(self) -> f64 {
        self.re.hypot(self.im)
    }

    /// Plain-number view of the value, which is its modulus.
    ///
    /// Comparing two values by `to_scalar()` compares magnitudes, not parts.
    #[inline]
    pub fn to_scalar(self) -> f64 {
        self.abs()
    }

    /// `self + s`, only the real part moves
    #[inline]
    pub fn add_scalar(self, s: f64) -> Self {
        Complex::new(self.re + s, self.im)
    }

    /// `self - s`, only the real part moves
    #[inline]
    pub fn sub_scalar(self, s: f64) -> Self {
        Complex::new(self.re - s, self.im)
    }

    /// `s - self`. Not the mirror of [`Complex::sub_scalar`]: the imaginary part is negated.
    #[inline]
    pub fn rsub_scalar(self, s: f64) -> Self {
        Complex::new(s - self.re, -self.im)
    }

    /// `self * s`
    #[inline]
    pub fn scale(self, s: f64) -> Self {
        Complex::new(self.re * s, self.im * s)
    }

    /// `self / s`. Division by zero follows IEEE rules (infinity or NaN).
    #[inline]
    pub fn div_scalar(self, s: f64) -> Self {
        Complex::new(self.re / s, self.im / s)
    }
}

impl From<f64> for Complex {
    #[inline]
    fn from(re: f64) -> Self {
        Complex::from_real(re)
    }
}
