//! Scalar trait shared by every value type
//!
//! All types in this crate are generic over a [`Scalar`]. Component-wise
//! arithmetic goes through the wrapping methods, so integral scalars never
//! panic on overflow; transcendental functions (`sqrt`, `sin`, `acos`, ...)
//! are evaluated in `f64` and cast back.

use bytemuck::Pod;
use num_traits::{One, WrappingAdd, WrappingMul, WrappingSub, Zero};
use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

/// Numeric type usable as a vector/matrix component
///
/// Implemented for `u8`, `i32`, `f32` and `f64`. For integral instantiations
/// addition, subtraction, multiplication and negation wrap.
pub trait Scalar:
    Copy
    + Default
    + PartialEq
    + PartialOrd
    + Debug
    + Display
    + Pod
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
{
    /// Widen to `f64`
    fn to_f64(self) -> f64;

    /// Narrow from `f64` (saturating for integral types)
    fn from_f64(value: f64) -> Self;

    /// Additive inverse
    fn negate(self) -> Self;

    /// Addition that wraps on integer overflow
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Subtraction that wraps on integer overflow
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// Multiplication that wraps on integer overflow
    fn wrapping_mul(self, rhs: Self) -> Self;

    /// Square root, evaluated in `f64` unless the type has a native one
    #[inline]
    fn sqrt(self) -> Self {
        Self::from_f64(self.to_f64().sqrt())
    }

    /// Absolute value
    #[inline]
    fn abs(self) -> Self {
        if self < Self::zero() {
            self.negate()
        } else {
            self
        }
    }

    /// The constant 2, used by the halving formulas
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }
}

macro_rules! impl_scalar_int {
    ($($t:ty),+) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }

                #[inline]
                fn negate(self) -> Self {
                    self.wrapping_neg()
                }

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    WrappingAdd::wrapping_add(&self, &rhs)
                }

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    WrappingSub::wrapping_sub(&self, &rhs)
                }

                #[inline]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    WrappingMul::wrapping_mul(&self, &rhs)
                }
            }
        )+
    };
}

macro_rules! impl_scalar_float {
    ($($t:ty),+) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }

                #[inline]
                fn negate(self) -> Self {
                    -self
                }

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    self - rhs
                }

                #[inline]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    self * rhs
                }

                #[inline]
                fn sqrt(self) -> Self {
                    <$t>::sqrt(self)
                }
            }
        )+
    };
}

impl_scalar_int!(u8, i32);
impl_scalar_float!(f32, f64);
