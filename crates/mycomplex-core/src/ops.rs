//! Operator impls for `Complex`
//!
//! Scalars are `f64` and may appear on either side of `+`, `-` and `*`.
//! `f64 - Complex` negates the imaginary part, so it is not the mirror of
//! `Complex - f64`. There is no complex/complex division.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use crate::Complex;

impl Add<Complex> for Complex {
    type Output = Complex;

    #[inline]
    fn add(self, rhs: Complex) -> Self::Output {
        Complex::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub<Complex> for Complex {
    type Output = Complex;

    #[inline]
    fn sub(self, rhs: Complex) -> Self::Output {
        Complex::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul<Complex> for Complex {
    type Output = Complex;

    #[inline]
    fn mul(self, rhs: Complex) -> Self::Output {
        Complex::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl Add<f64> for Complex {
    type Output = Complex;

    #[inline]
    fn add(self, rhs: f64) -> Self::Output {
        self.add_scalar(rhs)
    }
}

impl Sub<f64> for Complex {
    type Output = Complex;

    #[inline]
    fn sub(self, rhs: f64) -> Self::Output {
        self.sub_scalar(rhs)
    }
}

impl Mul<f64> for Complex {
    type Output = Complex;

    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl Div<f64> for Complex {
    type Output = Complex;

    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        self.div_scalar(rhs)
    }
}

impl Add<Complex> for f64 {
    type Output = Complex;

    #[inline]
    fn add(self, rhs: Complex) -> Self::Output {
        Complex::new(self + rhs.re, rhs.im)
    }
}

impl Sub<Complex> for f64 {
    type Output = Complex;

    #[inline]
    fn sub(self, rhs: Complex) -> Self::Output {
        rhs.rsub_scalar(self)
    }
}

impl Mul<Complex> for f64 {
    type Output = Complex;

    #[inline]
    fn mul(self, rhs: Complex) -> Self::Output {
        Complex::new(self * rhs.re, self * rhs.im)
    }
}

impl AddAssign<Complex> for Complex {
    #[inline]
    fn add_assign(&mut self, rhs: Complex) {
        self.re += rhs.re;
        self.im += rhs.im;
    }
}

impl SubAssign<Complex> for Complex {
    #[inline]
    fn sub_assign(&mut self, rhs: Complex) {
        self.re -= rhs.re;
        self.im -= rhs.im;
    }
}

impl MulAssign<Complex> for Complex {
    #[inline]
    fn mul_assign(&mut self, rhs: Complex) {
        let re = self.re;
        self.re = re * rhs.re - self.im * rhs.im;
        self.im = re * rhs.im + self.im * rhs.re;
    }
}

impl AddAssign<f64> for Complex {
    #[inline]
    fn add_assign(&mut self, rhs: f64) {
        self.re += rhs;
    }
}

impl SubAssign<f64> for Complex {
    #[inline]
    fn sub_assign(&mut self, rhs: f64) {
        self.re -= rhs;
    }
}

impl MulAssign<f64> for Complex {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        self.re *= rhs;
        self.im *= rhs;
    }
}

impl DivAssign<f64> for Complex {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        self.re /= rhs;
        self.im /= rhs;
    }
}

// Borrowed operands forward to the owned impls above.
macro_rules! forward_ref_binop {
    ($imp:ident, $method:ident, $lhs:ty, $rhs:ty) => {
        impl<'a> $imp<$rhs> for &'a $lhs {
            type Output = <$lhs as $imp<$rhs>>::Output;

            #[inline]
            fn $method(self, rhs: $rhs) -> Self::Output {
                $imp::$method(*self, rhs)
            }
        }

        impl<'b> $imp<&'b $rhs> for $lhs {
            type Output = <$lhs as $imp<$rhs>>::Output;

            #[inline]
            fn $method(self, rhs: &'b $rhs) -> Self::Output {
                $imp::$method(self, *rhs)
            }
        }

        impl<'a, 'b> $imp<&'b $rhs> for &'a $lhs {
            type Output = <$lhs as $imp<$rhs>>::Output;

            #[inline]
            fn $method(self, rhs: &'b $rhs) -> Self::Output {
                $imp::$method(*self, *rhs)
            }
        }
    };
}

forward_ref_binop!(Add, add, Complex, Complex);
forward_ref_binop!(Sub, sub, Complex, Complex);
forward_ref_binop!(Mul, mul, Complex, Complex);
forward_ref_binop!(Add, add, Complex, f64);
forward_ref_binop!(Sub, sub, Complex, f64);
forward_ref_binop!(Mul, mul, Complex, f64);
forward_ref_binop!(Div, div, Complex, f64);
forward_ref_binop!(Add, add, f64, Complex);
forward_ref_binop!(Sub, sub, f64, Complex);
forward_ref_binop!(Mul, mul, f64, Complex);

macro_rules! forward_ref_op_assign {
    ($imp:ident, $method:ident, $rhs:ty) => {
        impl<'b> $imp<&'b $rhs> for Complex {
            #[inline]
            fn $method(&mut self, rhs: &'b $rhs) {
                $imp::$method(self, *rhs);
            }
        }
    };
}

forward_ref_op_assign!(AddAssign, add_assign, Complex);
forward_ref_op_assign!(SubAssign, sub_assign, Complex);
forward_ref_op_assign!(MulAssign, mul_assign, Complex);
forward_ref_op_assign!(AddAssign, add_assign, f64);
forward_ref_op_assign!(SubAssign, sub_assign, f64);
forward_ref_op_assign!(MulAssign, mul_assign, f64);
forward_ref_op_assign!(DivAssign, div_assign, f64);
