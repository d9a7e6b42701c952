//! 2D Vector type

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{MathError, Scalar};

/// 2D Vector with x, y components
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2<T> {
    pub x: T,
    pub y: T,
}

impl_pod!(Vector2);
impl_approx_eq!(Vector2 { x, y });
impl_scalar_lhs_mul!(Vector2);

pub type Vector2U8 = Vector2<u8>;
pub type Vector2I = Vector2<i32>;
pub type Vector2F = Vector2<f32>;
pub type Vector2D = Vector2<f64>;

impl<T> Vector2<T> {
    /// Create a new Vector2
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Scalar> Vector2<T> {
    #[inline]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    #[inline]
    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero())
    }

    #[inline]
    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one())
    }

    /// Dot product
    #[inline]
    pub fn dot(self, other: Self) -> T {
        self.x.wrapping_mul(other.x).wrapping_add(self.y.wrapping_mul(other.y))
    }

    /// Squared length
    #[inline]
    pub fn norm(self) -> T {
        self.dot(self)
    }

    /// Length, evaluated in double precision
    #[inline]
    pub fn length(self) -> T {
        T::from_f64(self.norm().to_f64().sqrt())
    }

    #[inline]
    pub fn distance(self, other: Self) -> T {
        (self - other).length()
    }

    /// Normalize to unit length; the zero vector stays zero
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len == T::zero() {
            Self::zero()
        } else {
            self / len
        }
    }

    /// Normalize, failing when the length does not exceed `epsilon`
    pub fn try_normalize(self, epsilon: T) -> Result<Self, MathError> {
        let len = self.length();
        if len <= epsilon {
            log::trace!("Vector2::try_normalize rejected ({}), length {}", self, len);
            return Err(MathError::ZeroLength);
        }
        Ok(self / len)
    }

    /// Z component of the 3D cross product (positive when `other` is
    /// counter-clockwise from `self`)
    #[inline]
    pub fn ccw(self, other: Self) -> T {
        self.x.wrapping_mul(other.y).wrapping_sub(self.y.wrapping_mul(other.x))
    }

    /// Convert to another scalar type
    #[inline]
    pub fn cast<U: Scalar>(self) -> Vector2<U> {
        Vector2::new(U::from_f64(self.x.to_f64()), U::from_f64(self.y.to_f64()))
    }

    #[inline]
    pub fn to_array(self) -> [T; 2] {
        [self.x, self.y]
    }
}

impl<T> From<[T; 2]> for Vector2<T> {
    #[inline]
    fn from([x, y]: [T; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<T: fmt::Display> fmt::Display for Vector2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.x, self.y)
    }
}

// Operator overloads

impl<T: Scalar> std::ops::Add for Vector2<T> {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x.wrapping_add(other.x), self.y.wrapping_add(other.y))
    }
}

impl<T: Scalar> std::ops::AddAssign for Vector2<T> {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.x = self.x.wrapping_add(other.x);
        self.y = self.y.wrapping_add(other.y);
    }
}

impl<T: Scalar> std::ops::Sub for Vector2<T> {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x.wrapping_sub(other.x), self.y.wrapping_sub(other.y))
    }
}

impl<T: Scalar> std::ops::SubAssign for Vector2<T> {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.x = self.x.wrapping_sub(other.x);
        self.y = self.y.wrapping_sub(other.y);
    }
}

impl<T: Scalar> std::ops::Mul<T> for Vector2<T> {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: T) -> Self {
        Self::new(self.x.wrapping_mul(scalar), self.y.wrapping_mul(scalar))
    }
}

impl<T: Scalar> std::ops::MulAssign<T> for Vector2<T> {
    #[inline]
    fn mul_assign(&mut self, scalar: T) {
        self.x = self.x.wrapping_mul(scalar);
        self.y = self.y.wrapping_mul(scalar);
    }
}

impl<T: Scalar> std::ops::Div<T> for Vector2<T> {
    type Output = Self;
    #[inline]
    fn div(self, scalar: T) -> Self {
        Self::new(self.x / scalar, self.y / scalar)
    }
}

impl<T: Scalar> std::ops::DivAssign<T> for Vector2<T> {
    #[inline]
    fn div_assign(&mut self, scalar: T) {
        self.x /= scalar;
        self.y /= scalar;
    }
}

impl<T: Scalar> std::ops::Neg for Vector2<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(self.x.negate(), self.y.negate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let v = Vector2::new(1.0, 2.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(Vector2F::default(), Vector2::new(0.0, 0.0));
    }

    #[test]
    fn test_dot_and_norm() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(3.0, 4.0);
        assert_eq!(a.dot(b), 11.0);
        assert_eq!(b.norm(), 25.0);
        assert_eq!(b.length(), 5.0);
    }

    #[test]
    fn test_distance() {
        let a = Vector2::new(1.0f64, 1.0);
        let b = Vector2::new(4.0, 5.0);
        assert_eq!(a.distance(b), 5.0);
    }

    #[test]
    fn test_normalize() {
        let n = Vector2::new(0.0f32, -3.0).normalize();
        assert_eq!(n, Vector2::new(0.0, -1.0));
        assert_eq!(Vector2F::zero().normalize(), Vector2F::zero());
    }

    #[test]
    fn test_try_normalize() {
        assert!(Vector2::new(3.0f64, 4.0).try_normalize(1e-9).is_ok());
        assert_eq!(
            Vector2::new(1e-12f64, 0.0).try_normalize(1e-9),
            Err(MathError::ZeroLength)
        );
    }

    #[test]
    fn test_ccw() {
        let x = Vector2::new(1, 0);
        let y = Vector2::new(0, 1);
        assert_eq!(x.ccw(y), 1);
        assert_eq!(y.ccw(x), -1);
    }

    #[test]
    fn test_integer_length() {
        let v = Vector2I::new(6, 8);
        assert_eq!(v.length(), 10);
        assert_eq!(v.normalize(), Vector2::new(0, 0));
    }

    #[test]
    fn test_operators() {
        let mut v = Vector2::new(1.0, 2.0);
        v += Vector2::new(1.0, 1.0);
        assert_eq!(v, Vector2::new(2.0, 3.0));
        v -= Vector2::new(0.5, 0.5);
        v *= 2.0;
        assert_eq!(v, Vector2::new(3.0, 5.0));
        v /= 2.0;
        assert_eq!(v, Vector2::new(1.5, 2.5));
        assert_eq!(-v, Vector2::new(-1.5, -2.5));
        assert_eq!(2.0 * v, v * 2.0);
    }

    #[test]
    fn test_u8_neg_wraps() {
        assert_eq!(-Vector2U8::new(1, 0), Vector2::new(255, 0));
    }

    #[test]
    fn test_cast() {
        let v = Vector2::new(1.75f64, -2.5).cast::<i32>();
        assert_eq!(v, Vector2::new(1, -2));
    }

    #[test]
    fn test_display() {
        assert_eq!(Vector2::new(1, 2).to_string(), "1, 2");
    }
}
