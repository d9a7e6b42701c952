//! 4D Vector type

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{MathError, Matrix4, Scalar};

/// 4D Vector with x, y, z, w components
/// The w component is the homogeneous coordinate when transformed by a [`Matrix4`]
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector4<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl_pod!(Vector4);
impl_approx_eq!(Vector4 { x, y, z, w });
impl_scalar_lhs_mul!(Vector4);

pub type Vector4U8 = Vector4<u8>;
pub type Vector4I = Vector4<i32>;
pub type Vector4F = Vector4<f32>;
pub type Vector4D = Vector4<f64>;

impl<T> Vector4<T> {
    /// Create a new Vector4
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }
}

impl<T: Scalar> Vector4<T> {
    #[inline]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::zero())
    }

    #[inline]
    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero(), T::zero(), T::zero())
    }

    #[inline]
    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one(), T::zero(), T::zero())
    }

    #[inline]
    pub fn unit_z() -> Self {
        Self::new(T::zero(), T::zero(), T::one(), T::zero())
    }

    #[inline]
    pub fn unit_w() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::one())
    }

    /// Dot product
    #[inline]
    pub fn dot(self, other: Self) -> T {
        self.x
            .wrapping_mul(other.x)
            .wrapping_add(self.y.wrapping_mul(other.y))
            .wrapping_add(self.z.wrapping_mul(other.z))
            .wrapping_add(self.w.wrapping_mul(other.w))
    }

    /// Length squared (faster than length)
    #[inline]
    pub fn norm(self) -> T {
        self.dot(self)
    }

    /// Length (magnitude)
    #[inline]
    pub fn length(self) -> T {
        self.norm().sqrt()
    }

    #[inline]
    pub fn distance(self, other: Self) -> T {
        (self - other).length()
    }

    /// Normalize to unit length
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len == T::zero() {
            Self::zero()
        } else {
            self / len
        }
    }

    pub fn try_normalize(self, epsilon: T) -> Result<Self, MathError> {
        let len = self.length();
        if len <= epsilon {
            log::trace!("Vector4::try_normalize rejected ({}), length {}", self, len);
            return Err(MathError::ZeroLength);
        }
        Ok(self / len)
    }

    /// Row vector times matrix, `v * m`. No perspective divide.
    pub fn transform(self, m: &Matrix4<T>) -> Self {
        let [m11, m12, m13, m14, m21, m22, m23, m24, m31, m32, m33, m34, m41, m42, m43, m44] = m.m;
        Self::new(
            self.dot(Self::new(m11, m21, m31, m41)),
            self.dot(Self::new(m12, m22, m32, m42)),
            self.dot(Self::new(m13, m23, m33, m43)),
            self.dot(Self::new(m14, m24, m34, m44)),
        )
    }

    /// Extract the xyz components
    #[inline]
    pub fn xyz(self) -> crate::Vector3<T> {
        crate::Vector3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn cast<U: Scalar>(self) -> Vector4<U> {
        Vector4::new(
            U::from_f64(self.x.to_f64()),
            U::from_f64(self.y.to_f64()),
            U::from_f64(self.z.to_f64()),
            U::from_f64(self.w.to_f64()),
        )
    }

    #[inline]
    pub fn to_array(self) -> [T; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

impl<T> From<[T; 4]> for Vector4<T> {
    #[inline]
    fn from([x, y, z, w]: [T; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl<T: fmt::Display> fmt::Display for Vector4<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}, {}", self.x, self.y, self.z, self.w)
    }
}

// Operator overloads

impl<T: Scalar> std::ops::Add for Vector4<T> {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(
            self.x.wrapping_add(other.x),
            self.y.wrapping_add(other.y),
            self.z.wrapping_add(other.z),
            self.w.wrapping_add(other.w),
        )
    }
}

impl<T: Scalar> std::ops::AddAssign for Vector4<T> {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.x = self.x.wrapping_add(other.x);
        self.y = self.y.wrapping_add(other.y);
        self.z = self.z.wrapping_add(other.z);
        self.w = self.w.wrapping_add(other.w);
    }
}

impl<T: Scalar> std::ops::Sub for Vector4<T> {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(
            self.x.wrapping_sub(other.x),
            self.y.wrapping_sub(other.y),
            self.z.wrapping_sub(other.z),
            self.w.wrapping_sub(other.w),
        )
    }
}

impl<T: Scalar> std::ops::SubAssign for Vector4<T> {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.x = self.x.wrapping_sub(other.x);
        self.y = self.y.wrapping_sub(other.y);
        self.z = self.z.wrapping_sub(other.z);
        self.w = self.w.wrapping_sub(other.w);
    }
}

impl<T: Scalar> std::ops::Mul<T> for Vector4<T> {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: T) -> Self {
        Self::new(
            self.x.wrapping_mul(scalar),
            self.y.wrapping_mul(scalar),
            self.z.wrapping_mul(scalar),
            self.w.wrapping_mul(scalar),
        )
    }
}

impl<T: Scalar> std::ops::MulAssign<T> for Vector4<T> {
    #[inline]
    fn mul_assign(&mut self, scalar: T) {
        self.x = self.x.wrapping_mul(scalar);
        self.y = self.y.wrapping_mul(scalar);
        self.z = self.z.wrapping_mul(scalar);
        self.w = self.w.wrapping_mul(scalar);
    }
}

/// `v * m` is the same as [`Vector4::transform`]
impl<T: Scalar> std::ops::Mul<Matrix4<T>> for Vector4<T> {
    type Output = Self;
    #[inline]
    fn mul(self, m: Matrix4<T>) -> Self {
        self.transform(&m)
    }
}

impl<T: Scalar> std::ops::Div<T> for Vector4<T> {
    type Output = Self;
    #[inline]
    fn div(self, scalar: T) -> Self {
        Self::new(
            self.x / scalar,
            self.y / scalar,
            self.z / scalar,
            self.w / scalar,
        )
    }
}

impl<T: Scalar> std::ops::DivAssign<T> for Vector4<T> {
    #[inline]
    fn div_assign(&mut self, scalar: T) {
        self.x /= scalar;
        self.y /= scalar;
        self.z /= scalar;
        self.w /= scalar;
    }
}

impl<T: Scalar> std::ops::Neg for Vector4<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(self.x.negate(), self.y.negate(), self.z.negate(), self.w.negate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let v = Vector4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
        assert_eq!(v.w, 4.0);
    }

    #[test]
    fn test_dot() {
        let a = Vector4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vector4::new(5.0, 6.0, 7.0, 8.0);
        // 1*5 + 2*6 + 3*7 + 4*8 = 5 + 12 + 21 + 32 = 70
        assert_eq!(a.dot(b), 70.0);
    }

    #[test]
    fn test_length() {
        let v = Vector4::new(1.0f32, 0.0, 0.0, 0.0);
        assert_eq!(v.length(), 1.0);

        let v2 = Vector4::new(1.0f32, 1.0, 1.0, 1.0);
        assert!((v2.length() - 2.0).abs() < 0.0001);
        assert_eq!(v2.norm(), 4.0);
    }

    #[test]
    fn test_normalize() {
        let v = Vector4::new(3.0f32, 0.0, 0.0, 0.0);
        let n = v.normalize();
        assert!((n.x - 1.0).abs() < 0.0001);
        assert_eq!(n.y, 0.0);
        assert_eq!(n.z, 0.0);
        assert_eq!(n.w, 0.0);

        assert_eq!(Vector4F::zero().normalize(), Vector4F::zero());
        assert_eq!(Vector4F::zero().try_normalize(1e-6), Err(MathError::ZeroLength));
    }

    #[test]
    fn test_transform_identity() {
        let v = Vector4::new(1.0f64, 2.0, 3.0, 4.0);
        assert_eq!(v.transform(&Matrix4::identity()), v);
    }

    #[test]
    fn test_transform_keeps_w() {
        // No perspective divide: w comes straight out of the fourth column
        let m = Matrix4::translation(1.0f32, 2.0, 3.0) * 2.0;
        let v = Vector4::new(1.0, 1.0, 1.0, 1.0).transform(&m);
        assert_eq!(v, Vector4::new(4.0, 6.0, 8.0, 2.0));
        assert_eq!(Vector4::new(1.0, 1.0, 1.0, 1.0) * m, v);
    }

    #[test]
    fn test_transform_zero_matrix() {
        let v = Vector4::new(1.0f32, 2.0, 3.0, 4.0).transform(&Matrix4::zero());
        assert_eq!(v, Vector4::zero());
    }

    #[test]
    fn test_add_sub() {
        let a = Vector4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vector4::new(5.0, 6.0, 7.0, 8.0);
        assert_eq!(a + b, Vector4::new(6.0, 8.0, 10.0, 12.0));
        assert_eq!(b - a, Vector4::new(4.0, 4.0, 4.0, 4.0));
    }

    #[test]
    fn test_mul_scalar() {
        let v = Vector4::new(1.0, 2.0, 3.0, 4.0);
        let scaled = v * 2.0;
        assert_eq!(scaled, Vector4::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(2.0 * v, scaled);
        assert_eq!(scaled / 2.0, v);
    }

    #[test]
    fn test_neg() {
        let v = Vector4::new(1.0, -2.0, 3.0, -4.0);
        assert_eq!(-v, Vector4::new(-1.0, 2.0, -3.0, 4.0));
    }

    #[test]
    fn test_unit_axes() {
        let axes = [Vector4I::unit_x(), Vector4::unit_y(), Vector4::unit_z(), Vector4::unit_w()];
        for (i, a) in axes.iter().enumerate() {
            assert_eq!(a.norm(), 1);
            for b in &axes[i + 1..] {
                assert_eq!(a.dot(*b), 0);
            }
        }
    }

    #[test]
    fn test_xyz() {
        let v = Vector4::new(1, 2, 3, 4);
        assert_eq!(v.xyz(), crate::Vector3::new(1, 2, 3));
    }

    #[test]
    fn test_display() {
        assert_eq!(Vector4::new(1, 2, 3, 4).to_string(), "1, 2, 3, 4");
    }
}
