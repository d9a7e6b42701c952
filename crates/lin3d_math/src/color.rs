//! RGBA color
//!
//! Channels are plain scalars with no implied range: `u8` colors wrap and
//! truncate like `u8`, float colors are unclamped.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Scalar;

/// RGBA color
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Color<T> {
    pub r: T,
    pub g: T,
    pub b: T,
    pub a: T,
}

impl_pod!(Color);
impl_approx_eq!(Color { r, g, b, a });

pub type ColorU8 = Color<u8>;
pub type ColorI = Color<i32>;
pub type ColorF = Color<f32>;
pub type ColorD = Color<f64>;

impl<T> Color<T> {
    #[inline]
    pub const fn new(r: T, g: T, b: T, a: T) -> Self {
        Self { r, g, b, a }
    }
}

impl<T: Scalar> Color<T> {
    #[inline]
    pub fn to_array(self) -> [T; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn cast<U: Scalar>(self) -> Color<U> {
        Color::new(
            U::from_f64(self.r.to_f64()),
            U::from_f64(self.g.to_f64()),
            U::from_f64(self.b.to_f64()),
            U::from_f64(self.a.to_f64()),
        )
    }
}

impl<T> From<[T; 4]> for Color<T> {
    #[inline]
    fn from([r, g, b, a]: [T; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl<T: fmt::Display> fmt::Display for Color<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}, {}", self.r, self.g, self.b, self.a)
    }
}

// Operator overloads

impl<T: Scalar> std::ops::Add for Color<T> {
    type Output = Self;
    #[inline]
    fn add(self, c: Self) -> Self {
        Self::new(
            self.r.wrapping_add(c.r),
            self.g.wrapping_add(c.g),
            self.b.wrapping_add(c.b),
            self.a.wrapping_add(c.a),
        )
    }
}

impl<T: Scalar> std::ops::AddAssign for Color<T> {
    #[inline]
    fn add_assign(&mut self, c: Self) {
        *self = *self + c;
    }
}

impl<T: Scalar> std::ops::Sub for Color<T> {
    type Output = Self;
    #[inline]
    fn sub(self, c: Self) -> Self {
        Self::new(
            self.r.wrapping_sub(c.r),
            self.g.wrapping_sub(c.g),
            self.b.wrapping_sub(c.b),
            self.a.wrapping_sub(c.a),
        )
    }
}

impl<T: Scalar> std::ops::SubAssign for Color<T> {
    #[inline]
    fn sub_assign(&mut self, c: Self) {
        *self = *self - c;
    }
}

impl<T: Scalar> std::ops::Neg for Color<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(self.r.negate(), self.g.negate(), self.b.negate(), self.a.negate())
    }
}

/// Scales all four channels
impl<T: Scalar> std::ops::Mul<T> for Color<T> {
    type Output = Self;
    #[inline]
    fn mul(self, s: T) -> Self {
        Self::new(
            self.r.wrapping_mul(s),
            self.g.wrapping_mul(s),
            self.b.wrapping_mul(s),
            self.a.wrapping_mul(s),
        )
    }
}

impl<T: Scalar> std::ops::MulAssign<T> for Color<T> {
    #[inline]
    fn mul_assign(&mut self, s: T) {
        *self = *self * s;
    }
}

/// Each channel is multiplied by `1 / s` in double precision and cast back,
/// so `u8` colors can be scaled down.
impl<T: Scalar> std::ops::Div<T> for Color<T> {
    type Output = Self;
    fn div(self, s: T) -> Self {
        let t = 1.0 / s.to_f64();
        let scale = |v: T| T::from_f64(v.to_f64() * t);
        Self::new(scale(self.r), scale(self.g), scale(self.b), scale(self.a))
    }
}

impl<T: Scalar> std::ops::DivAssign<T> for Color<T> {
    #[inline]
    fn div_assign(&mut self, s: T) {
        *self = *self / s;
    }
}

// `s * color` scales only r, g and b; alpha is kept.
macro_rules! impl_color_lhs_mul {
    ($($s:ty),+) => {
        $(
            impl std::ops::Mul<Color<$s>> for $s {
                type Output = Color<$s>;
                #[inline]
                fn mul(self, c: Color<$s>) -> Color<$s> {
                    Color::new(
                        c.r.wrapping_mul(self),
                        c.g.wrapping_mul(self),
                        c.b.wrapping_mul(self),
                        c.a,
                    )
                }
            }
        )+
    };
}

impl_color_lhs_mul!(u8, i32, f32, f64);
