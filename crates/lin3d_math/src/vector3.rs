//! 3D Vector type
//!
//! Besides the usual vector-space operations this module holds the
//! homogeneous point/normal transforms against a [`Matrix4`] and the
//! ray/triangle intersection test.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{MathError, Matrix4, Scalar};

/// 3D Vector with x, y, z components
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl_pod!(Vector3);
impl_approx_eq!(Vector3 { x, y, z });
impl_scalar_lhs_mul!(Vector3);

pub type Vector3U8 = Vector3<u8>;
pub type Vector3I = Vector3<i32>;
pub type Vector3F = Vector3<f32>;
pub type Vector3D = Vector3<f64>;

/// Result of a successful ray/triangle test
///
/// `dist` is the ray parameter of the hit point (`org + dist * dir`).
/// `u` and `v` are the barycentric weights of the second and third vertex,
/// so the hit point is `v0 + u * (v1 - v0) + v * (v2 - v0)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TriangleHit<T> {
    pub dist: T,
    pub u: T,
    pub v: T,
}

impl<T> Vector3<T> {
    /// Create a new Vector3
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl<T: Scalar> Vector3<T> {
    #[inline]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    #[inline]
    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero(), T::zero())
    }

    #[inline]
    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one(), T::zero())
    }

    #[inline]
    pub fn unit_z() -> Self {
        Self::new(T::zero(), T::zero(), T::one())
    }

    /// Dot product
    #[inline]
    pub fn dot(self, other: Self) -> T {
        self.x
            .wrapping_mul(other.x)
            .wrapping_add(self.y.wrapping_mul(other.y))
            .wrapping_add(self.z.wrapping_mul(other.z))
    }

    /// Right-handed cross product
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y.wrapping_mul(other.z).wrapping_sub(self.z.wrapping_mul(other.y)),
            self.z.wrapping_mul(other.x).wrapping_sub(self.x.wrapping_mul(other.z)),
            self.x.wrapping_mul(other.y).wrapping_sub(self.y.wrapping_mul(other.x)),
        )
    }

    /// Squared length
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
            log::trace!("Vector3::try_normalize rejected ({}), length {}", self, len);
            return Err(MathError::ZeroLength);
        }
        Ok(self / len)
    }

    /// Transform a point: `(x, y, z, 1) * m`, followed by the divide by `w`.
    ///
    /// Returns `None` when the resulting `w` is zero; callers that keep an
    /// output value simply leave it untouched in that case.
    pub fn transform(self, m: &Matrix4<T>) -> Option<Self> {
        let [m11, m12, m13, m14, m21, m22, m23, m24, m31, m32, m33, m34, m41, m42, m43, m44] = m.m;
        let x = self.dot(Self::new(m11, m21, m31)).wrapping_add(m41);
        let y = self.dot(Self::new(m12, m22, m32)).wrapping_add(m42);
        let z = self.dot(Self::new(m13, m23, m33)).wrapping_add(m43);
        let w = self.dot(Self::new(m14, m24, m34)).wrapping_add(m44);
        if w == T::zero() {
            return None;
        }
        Some(Self::new(x / w, y / w, z / w))
    }

    /// Transform a direction: like [`transform`](Self::transform) but
    /// without the translation row. Also divides by `w` and returns `None`
    /// when it is zero.
    pub fn transform_normal(self, m: &Matrix4<T>) -> Option<Self> {
        let [m11, m12, m13, m14, m21, m22, m23, m24, m31, m32, m33, m34, ..] = m.m;
        let x = self.dot(Self::new(m11, m21, m31));
        let y = self.dot(Self::new(m12, m22, m32));
        let z = self.dot(Self::new(m13, m23, m33));
        let w = self.dot(Self::new(m14, m24, m34));
        if w == T::zero() {
            return None;
        }
        Some(Self::new(x / w, y / w, z / w))
    }

    pub fn try_transform(self, m: &Matrix4<T>) -> Result<Self, MathError> {
        self.transform(m).ok_or(MathError::ZeroW)
    }

    pub fn try_transform_normal(self, m: &Matrix4<T>) -> Result<Self, MathError> {
        self.transform_normal(m).ok_or(MathError::ZeroW)
    }

    /// Intersect the ray `org + t * dir` with triangle `(v0, v1, v2)`.
    ///
    /// The hit point is projected onto the triangle's plane and accepted when
    /// it lies on the inner side of all three edges. A ray parallel to the
    /// plane never hits. `dist` may be negative (hit behind the origin).
    pub fn intersect_tri(
        v0: Self,
        v1: Self,
        v2: Self,
        org: Self,
        dir: Self,
    ) -> Option<TriangleHit<T>> {
        Self::try_intersect_tri(v0, v1, v2, org, dir).ok().flatten()
    }

    /// Checked form of [`intersect_tri`](Self::intersect_tri): a parallel ray
    /// (or a degenerate triangle, whose normal is zero) is reported as
    /// [`MathError::ParallelRay`]; a miss as `Ok(None)`. A hit on a triangle
    /// whose area rounds to zero in `T` (small integral triangles) is
    /// [`MathError::DegenerateTriangle`].
    pub fn try_intersect_tri(
        v0: Self,
        v1: Self,
        v2: Self,
        org: Self,
        dir: Self,
    ) -> Result<Option<TriangleHit<T>>, MathError> {
        let t1 = v1 - v0;
        let t2 = v2 - v0;
        let n = t1.cross(t2).normalize();

        let denom = dir.dot(n);
        if denom == T::zero() {
            log::trace!("Vector3::intersect_tri: ray direction ({}) parallel to triangle", dir);
            return Err(MathError::ParallelRay);
        }
        let t = (org - v0).dot(n).negate() / denom;
        let p = org + dir * t;

        let vp0 = v0 - p;
        let vp1 = v1 - p;
        let vp2 = v2 - p;

        let c0 = vp0.cross(v1 - v0).dot(n);
        let c1 = vp1.cross(v2 - v1).dot(n);
        let c2 = vp2.cross(v0 - v2).dot(n);
        let zero = T::zero();
        if !(c0 >= zero && c1 >= zero && c2 >= zero) {
            return Ok(None);
        }

        let area = triangle_area(t1, t2);
        if area == T::zero() {
            log::trace!("Vector3::intersect_tri: triangle area truncates to zero");
            return Err(MathError::DegenerateTriangle);
        }
        let area_u = triangle_area(t2, vp2);
        let area_v = triangle_area(t1, vp1);

        Ok(Some(TriangleHit {
            dist: t,
            u: area_u / area,
            v: area_v / area,
        }))
    }

    /// Convert to another scalar type
    #[inline]
    pub fn cast<U: Scalar>(self) -> Vector3<U> {
        Vector3::new(
            U::from_f64(self.x.to_f64()),
            U::from_f64(self.y.to_f64()),
            U::from_f64(self.z.to_f64()),
        )
    }

    #[inline]
    pub fn to_array(self) -> [T; 3] {
        [self.x, self.y, self.z]
    }
}

/// Area of the triangle spanned by `a` and `b`: `sqrt(|a|²|b|² - (a·b)²) / 2`
fn triangle_area<T: Scalar>(a: Vector3<T>, b: Vector3<T>) -> T {
    let (la, lb, ab) = (a.norm(), b.norm(), a.dot(b));
    let squared = la.wrapping_mul(lb).wrapping_sub(ab.wrapping_mul(ab)).to_f64().max(0.0);
    T::from_f64(squared.sqrt()) / T::two()
}

impl<T> From<[T; 3]> for Vector3<T> {
    #[inline]
    fn from([x, y, z]: [T; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl<T: fmt::Display> fmt::Display for Vector3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.x, self.y, self.z)
    }
}

// Operator overloads

impl<T: Scalar> std::ops::Add for Vector3<T> {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(
            self.x.wrapping_add(other.x),
            self.y.wrapping_add(other.y),
            self.z.wrapping_add(other.z),
        )
    }
}

impl<T: Scalar> std::ops::AddAssign for Vector3<T> {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.x = self.x.wrapping_add(other.x);
        self.y = self.y.wrapping_add(other.y);
        self.z = self.z.wrapping_add(other.z);
    }
}

impl<T: Scalar> std::ops::Sub for Vector3<T> {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(
            self.x.wrapping_sub(other.x),
            self.y.wrapping_sub(other.y),
            self.z.wrapping_sub(other.z),
        )
    }
}

impl<T: Scalar> std::ops::SubAssign for Vector3<T> {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.x = self.x.wrapping_sub(other.x);
        self.y = self.y.wrapping_sub(other.y);
        self.z = self.z.wrapping_sub(other.z);
    }
}

impl<T: Scalar> std::ops::Mul<T> for Vector3<T> {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: T) -> Self {
        Self::new(
            self.x.wrapping_mul(scalar),
            self.y.wrapping_mul(scalar),
            self.z.wrapping_mul(scalar),
        )
    }
}

impl<T: Scalar> std::ops::MulAssign<T> for Vector3<T> {
    #[inline]
    fn mul_assign(&mut self, scalar: T) {
        self.x = self.x.wrapping_mul(scalar);
        self.y = self.y.wrapping_mul(scalar);
        self.z = self.z.wrapping_mul(scalar);
    }
}

impl<T: Scalar> std::ops::Div<T> for Vector3<T> {
    type Output = Self;
    #[inline]
    fn div(self, scalar: T) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl<T: Scalar> std::ops::DivAssign<T> for Vector3<T> {
    #[inline]
    fn div_assign(&mut self, scalar: T) {
        self.x /= scalar;
        self.y /= scalar;
        self.z /= scalar;
    }
}

impl<T: Scalar> std::ops::Neg for Vector3<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(self.x.negate(), self.y.negate(), self.z.negate())
    }
}
