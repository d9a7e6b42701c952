//! Plane in Hessian form: `a*x + b*y + c*z + d = 0`
//!
//! `(a, b, c)` is expected to be the unit normal, but it is not enforced.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{MathError, Scalar, Vector3, Vector4};

/// Plane coefficients `(a, b, c, d)`
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plane<T> {
    pub a: T,
    pub b: T,
    pub c: T,
    pub d: T,
}

impl_pod!(Plane);
impl_approx_eq!(Plane { a, b, c, d });
impl_scalar_lhs_mul!(Plane);

pub type PlaneU8 = Plane<u8>;
pub type PlaneI = Plane<i32>;
pub type PlaneF = Plane<f32>;
pub type PlaneD = Plane<f64>;

/// Result of a ray/plane test: the hit point and its ray parameter
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineHit<T> {
    pub pos: Vector3<T>,
    pub dist: T,
}

impl<T: Scalar> Default for Plane<T> {
    /// `(0, 0, 0, 1)`
    fn default() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::one())
    }
}

impl<T> Plane<T> {
    #[inline]
    pub const fn new(a: T, b: T, c: T, d: T) -> Self {
        Self { a, b, c, d }
    }
}

impl<T: Scalar> Plane<T> {
    /// Plane through three points; the normal is
    /// `normalize((p1 - p0) x (p2 - p0))`
    ///
    /// Collinear points give a zero normal. Use [`Plane::try_from_points`] to
    /// detect that case.
    pub fn from_points(points: [Vector3<T>; 3]) -> Self {
        let [p0, p1, p2] = points;
        let normal = (p1 - p0).cross(p2 - p0).normalize();
        Self::from_point_normal(p0, normal)
    }

    /// Like [`Plane::from_points`], failing when the cross product of the
    /// edges is no longer than `epsilon`
    pub fn try_from_points(points: [Vector3<T>; 3], epsilon: T) -> Result<Self, MathError> {
        let [p0, p1, p2] = points;
        let normal = (p1 - p0)
            .cross(p2 - p0)
            .try_normalize(epsilon)
            .map_err(|_| {
                log::trace!("Plane::try_from_points rejected {}; {}; {}", p0, p1, p2);
                MathError::DegenerateTriangle
            })?;
        Ok(Self::from_point_normal(p0, normal))
    }

    /// Plane through `point` with the given normal; `d = -dot(normal, point)`
    #[inline]
    pub fn from_point_normal(point: Vector3<T>, normal: Vector3<T>) -> Self {
        Self::new(normal.x, normal.y, normal.z, normal.dot(point).negate())
    }

    #[inline]
    pub fn normal(self) -> Vector3<T> {
        Vector3::new(self.a, self.b, self.c)
    }

    /// Intersect the line `org + t * dir` with the plane
    ///
    /// Returns `None` when `dir` is exactly parallel to the plane. `dist` is
    /// the parameter `t`, which is negative for hits behind `org`.
    pub fn intersect_line(self, org: Vector3<T>, dir: Vector3<T>) -> Option<LineHit<T>> {
        let c = self.dot_normal(dir);
        if c == T::zero() {
            return None;
        }
        Some(self.line_hit(org, dir, c))
    }

    /// Like [`Plane::intersect_line`], treating `|dot(n, dir)| <= epsilon` as
    /// parallel
    pub fn try_intersect_line(
        self,
        org: Vector3<T>,
        dir: Vector3<T>,
        epsilon: T,
    ) -> Result<LineHit<T>, MathError> {
        let c = self.dot_normal(dir);
        if c.abs() <= epsilon {
            log::trace!("Plane::try_intersect_line rejected, dot(n, dir) = {}", c);
            return Err(MathError::ParallelRay);
        }
        Ok(self.line_hit(org, dir, c))
    }

    fn line_hit(self, org: Vector3<T>, dir: Vector3<T>, c: T) -> LineHit<T> {
        let t = self.dot_coord(org).negate() / c;
        LineHit {
            pos: org + dir * t,
            dist: t,
        }
    }

    /// `a*x + b*y + c*z + d*w`
    #[inline]
    pub fn dot(self, v: Vector4<T>) -> T {
        Vector4::new(self.a, self.b, self.c, self.d).dot(v)
    }

    /// Signed distance-like value of a point (`w = 1`)
    #[inline]
    pub fn dot_coord(self, v: Vector3<T>) -> T {
        self.dot_normal(v).wrapping_add(self.d)
    }

    /// Dot product with the normal only (`w = 0`)
    #[inline]
    pub fn dot_normal(self, v: Vector3<T>) -> T {
        self.normal().dot(v)
    }

    pub fn cast<U: Scalar>(self) -> Plane<U> {
        Plane::new(
            U::from_f64(self.a.to_f64()),
            U::from_f64(self.b.to_f64()),
            U::from_f64(self.c.to_f64()),
            U::from_f64(self.d.to_f64()),
        )
    }
}

impl<T: fmt::Display> fmt::Display for Plane<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}, {}", self.a, self.b, self.c, self.d)
    }
}

// Operator overloads

impl<T: Scalar> std::ops::Neg for Plane<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(self.a.negate(), self.b.negate(), self.c.negate(), self.d.negate())
    }
}

impl<T: Scalar> std::ops::Mul<T> for Plane<T> {
    type Output = Self;
    #[inline]
    fn mul(self, s: T) -> Self {
        Self::new(
            self.a.wrapping_mul(s),
            self.b.wrapping_mul(s),
            self.c.wrapping_mul(s),
            self.d.wrapping_mul(s),
        )
    }
}

impl<T: Scalar> std::ops::MulAssign<T> for Plane<T> {
    #[inline]
    fn mul_assign(&mut self, s: T) {
        *self = *self * s;
    }
}

/// Multiplies by the reciprocal `1 / s`
impl<T: Scalar> std::ops::Div<T> for Plane<T> {
    type Output = Self;
    #[inline]
    fn div(self, s: T) -> Self {
        self * (T::one() / s)
    }
}

impl<T: Scalar> std::ops::DivAssign<T> for Plane<T> {
    #[inline]
    fn div_assign(&mut self, s: T) {
        *self = *self / s;
    }
}
