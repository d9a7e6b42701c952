//! Quaternion for 3D rotations
//!
//! Stored as `(x, y, z, w)` with `w` the scalar part. The identity rotation is
//! `(0, 0, 0, 1)`. Rotation quaternions are expected to be unit length, but
//! nothing here enforces it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{MathError, Matrix4, Scalar, Vector3};

/// Quaternion `x*i + y*j + z*k + w`
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quaternion<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl_pod!(Quaternion);
impl_approx_eq!(Quaternion { x, y, z, w });
impl_scalar_lhs_mul!(Quaternion);

pub type QuaternionU8 = Quaternion<u8>;
pub type QuaternionI = Quaternion<i32>;
pub type QuaternionF = Quaternion<f32>;
pub type QuaternionD = Quaternion<f64>;

impl<T: Scalar> Default for Quaternion<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T> Quaternion<T> {
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }
}

impl<T: Scalar> Quaternion<T> {
    /// The identity rotation (0, 0, 0, 1)
    #[inline]
    pub fn identity() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::one())
    }

    #[inline]
    pub fn dot(self, other: Self) -> T {
        self.x
            .wrapping_mul(other.x)
            .wrapping_add(self.y.wrapping_mul(other.y))
            .wrapping_add(self.z.wrapping_mul(other.z))
            .wrapping_add(self.w.wrapping_mul(other.w))
    }

    /// Squared length
    #[inline]
    pub fn norm(self) -> T {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> T {
        self.norm().sqrt()
    }

    /// Normalize to unit length; a zero quaternion becomes the identity
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len == T::zero() {
            Self::identity()
        } else {
            self / len
        }
    }

    pub fn try_normalize(self, epsilon: T) -> Result<Self, MathError> {
        let len = self.length();
        if len <= epsilon {
            log::trace!("Quaternion::try_normalize rejected ({}), length {}", self, len);
            return Err(MathError::ZeroLength);
        }
        Ok(self / len)
    }

    /// Negate the vector part
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(self.x.negate(), self.y.negate(), self.z.negate(), self.w)
    }

    /// Conjugate divided by the length. A zero quaternion yields the identity.
    ///
    /// This equals the true inverse (conjugate over the *squared* length) only
    /// for unit quaternions, which is the case for every rotation.
    pub fn inverse(self) -> Self {
        let len = self.length();
        if len == T::zero() {
            Self::identity()
        } else {
            self.conjugate() / len
        }
    }

    /// Same as [`Quaternion::inverse`], failing when the length does not
    /// exceed `epsilon`
    pub fn try_inverse(self, epsilon: T) -> Result<Self, MathError> {
        let len = self.length();
        if len <= epsilon {
            log::trace!("Quaternion::try_inverse rejected ({}), length {}", self, len);
            return Err(MathError::ZeroLength);
        }
        Ok(self.conjugate() / len)
    }

    /// Rotation from Euler angles: roll about Z, then pitch about X, then yaw
    /// about Y, composed as `q_roll * q_pitch * q_yaw`
    pub fn rotation(yaw: T, pitch: T, roll: T) -> Self {
        let o = T::zero();
        let (ys, yc) = half_sin_cos(yaw);
        let (ps, pc) = half_sin_cos(pitch);
        let (rs, rc) = half_sin_cos(roll);

        let q_yaw = Self::new(o, ys, o, yc);
        let q_pitch = Self::new(ps, o, o, pc);
        let q_roll = Self::new(o, o, rs, rc);

        q_roll * q_pitch * q_yaw
    }

    /// Rotation of `rad` radians about `axis`, normalized
    pub fn rotation_axis(axis: Vector3<T>, rad: T) -> Self {
        let (s, c) = half_sin_cos(rad);
        Self::new(axis.x * s, axis.y * s, axis.z * s, c).normalize()
    }

    /// Equivalent row-vector rotation matrix
    #[rustfmt::skip]
    pub fn to_matrix(self) -> Matrix4<T> {
        let Self { x, y, z, w } = self;
        let (o, l, two) = (T::zero(), T::one(), T::two());

        Matrix4::new(
            l - two * (y * y + z * z), two * (x * y + z * w),     two * (z * x - w * y),     o,
            two * (x * y - z * w),     l - two * (z * z + x * x), two * (y * z + w * x),     o,
            two * (z * x + w * y),     two * (y * z - x * w),     l - two * (y * y + x * x), o,
            o,                         o,                         o,                         l,
        )
    }

    /// Spherical linear interpolation from `q1` (t = 0) to `q2` (t = 1)
    ///
    /// Nearly parallel inputs return `q1`. No shortest-path correction is
    /// applied, so `q2` and `-q2` interpolate along different arcs.
    pub fn slerp(q1: Self, q2: Self, t: T) -> Self {
        let a = q1.dot(q2).to_f64();
        let b = 1.0 - a * a;
        if b <= 0.0 {
            return q1;
        }

        let angle = a.acos();
        let sin_angle = b.sqrt();
        let c = angle * t.to_f64();
        let t0 = (angle - c).sin() / sin_angle;
        let t1 = c.sin() / sin_angle;

        q1 * T::from_f64(t0) + q2 * T::from_f64(t1)
    }

    pub fn cast<U: Scalar>(self) -> Quaternion<U> {
        Quaternion::new(
            U::from_f64(self.x.to_f64()),
            U::from_f64(self.y.to_f64()),
            U::from_f64(self.z.to_f64()),
            U::from_f64(self.w.to_f64()),
        )
    }
}

/// `(sin(rad / 2), cos(rad / 2))` in double precision
fn half_sin_cos<T: Scalar>(rad: T) -> (T, T) {
    let (s, c) = (rad.to_f64() / 2.0).sin_cos();
    (T::from_f64(s), T::from_f64(c))
}

impl<T: fmt::Display> fmt::Display for Quaternion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}, {}", self.x, self.y, self.z, self.w)
    }
}

// Operator overloads

impl<T: Scalar> std::ops::Add for Quaternion<T> {
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

impl<T: Scalar> std::ops::AddAssign for Quaternion<T> {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl<T: Scalar> std::ops::Sub for Quaternion<T> {
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

impl<T: Scalar> std::ops::SubAssign for Quaternion<T> {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

/// Hamilton product; `q1 * q2` applies `q2` first when rotating
impl<T: Scalar> std::ops::Mul for Quaternion<T> {
    type Output = Self;
    fn mul(self, q: Self) -> Self {
        let p = self;
        let (add, sub, mul) = (T::wrapping_add, T::wrapping_sub, T::wrapping_mul);
        Self::new(
            sub(add(mul(p.w, q.x), mul(p.x, q.w)), sub(mul(p.y, q.z), mul(p.z, q.y))),
            sub(add(mul(p.w, q.y), mul(p.y, q.w)), sub(mul(p.z, q.x), mul(p.x, q.z))),
            sub(add(mul(p.w, q.z), mul(p.z, q.w)), sub(mul(p.x, q.y), mul(p.y, q.x))),
            sub(sub(sub(mul(p.w, q.w), mul(p.x, q.x)), mul(p.y, q.y)), mul(p.z, q.z)),
        )
    }
}

impl<T: Scalar> std::ops::MulAssign for Quaternion<T> {
    #[inline]
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

impl<T: Scalar> std::ops::Mul<T> for Quaternion<T> {
    type Output = Self;
    #[inline]
    fn mul(self, s: T) -> Self {
        Self::new(
            self.x.wrapping_mul(s),
            self.y.wrapping_mul(s),
            self.z.wrapping_mul(s),
            self.w.wrapping_mul(s),
        )
    }
}

impl<T: Scalar> std::ops::MulAssign<T> for Quaternion<T> {
    #[inline]
    fn mul_assign(&mut self, s: T) {
        *self = *self * s;
    }
}

/// Multiplies by the reciprocal `1 / s`
impl<T: Scalar> std::ops::Div<T> for Quaternion<T> {
    type Output = Self;
    #[inline]
    fn div(self, s: T) -> Self {
        self * (T::one() / s)
    }
}

impl<T: Scalar> std::ops::DivAssign<T> for Quaternion<T> {
    #[inline]
    fn div_assign(&mut self, s: T) {
        *self = *self / s;
    }
}

impl<T: Scalar> std::ops::Neg for Quaternion<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(self.x.negate(), self.y.negate(), self.z.negate(), self.w.negate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, FRAC_PI_8, PI};

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec_approx_eq(a: Vector3<f64>, b: Vector3<f64>) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
    }

    fn rotate(q: QuaternionD, v: Vector3<f64>) -> Vector3<f64> {
        v.transform(&q.to_matrix()).unwrap()
    }

    #[test]
    fn test_default_is_identity() {
        assert_eq!(QuaternionF::default(), Quaternion::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_identity_to_matrix() {
        assert_eq!(QuaternionD::identity().to_matrix(), Matrix4::identity());
        assert_eq!(QuaternionF::identity().to_matrix(), Matrix4::identity());
    }

    #[test]
    fn test_product_with_identity() {
        let q = Quaternion::new(0.1, 0.2, 0.3, 0.9);
        assert_eq!(q * Quaternion::identity(), q);
        assert_eq!(Quaternion::identity() * q, q);
    }

    #[test]
    fn test_product_basis() {
        // i * j = k, j * i = -k
        let i = Quaternion::new(1.0, 0.0, 0.0, 0.0);
        let j = Quaternion::new(0.0, 1.0, 0.0, 0.0);
        let k = Quaternion::new(0.0, 0.0, 1.0, 0.0);
        assert_eq!(i * j, -k);
        assert_eq!(j * i, k);
        assert_eq!(i * i, Quaternion::new(0.0, 0.0, 0.0, -1.0));
    }

    #[test]
    fn test_normalize() {
        let q = Quaternion::new(0.0, 0.0, 3.0, 4.0).normalize();
        assert!(approx_eq(q.length(), 1.0));
        assert_eq!(QuaternionD::new(0.0, 0.0, 0.0, 0.0).normalize(), Quaternion::identity());
        assert_eq!(
            QuaternionD::new(0.0, 0.0, 0.0, 0.0).try_normalize(1e-9),
            Err(MathError::ZeroLength)
        );
    }

    #[test]
    fn test_conjugate() {
        let q = Quaternion::new(1, 2, 3, 4);
        assert_eq!(q.conjugate(), Quaternion::new(-1, -2, -3, 4));
    }

    #[test]
    fn test_inverse_of_unit_quaternion() {
        let q = Quaternion::rotation_axis(Vector3::new(0.0, 1.0, 0.0), 0.7);
        assert_relative_eq!(q * q.inverse(), Quaternion::identity(), epsilon = 1e-12);
    }

    #[test]
    fn test_inverse_divides_by_length() {
        // Non-unit input: conjugate / |q|, not conjugate / |q|^2
        let q = QuaternionD::new(0.0, 0.0, 0.0, 2.0);
        assert_eq!(q.inverse(), Quaternion::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(q.try_inverse(1e-9), Ok(q.inverse()));
    }

    #[test]
    fn test_inverse_of_zero() {
        let zero = QuaternionD::new(0.0, 0.0, 0.0, 0.0);
        assert_eq!(zero.inverse(), Quaternion::identity());
        assert_eq!(zero.try_inverse(1e-9), Err(MathError::ZeroLength));
    }

    #[test]
    fn test_rotation_axis_fixes_axis() {
        let axis = Vector3::new(1.0, 1.0, 1.0).normalize();
        let q = Quaternion::rotation_axis(axis, 1.234);
        let p = axis * 2.0;
        assert!(vec_approx_eq(rotate(q, p), p));
    }

    #[test]
    fn test_rotation_axis_z_90() {
        let q = Quaternion::rotation_axis(Vector3::new(0.0, 0.0, 1.0), FRAC_PI_2);
        let v = rotate(q, Vector3::new(1.0, 0.0, 0.0));
        assert!(vec_approx_eq(v, Vector3::new(0.0, 1.0, 0.0)));
    }

    #[test]
    fn test_rotation_axis_normalizes() {
        let q = Quaternion::rotation_axis(Vector3::new(0.0, 0.0, 5.0), PI / 3.0);
        assert!(approx_eq(q.length(), 1.0));
    }

    #[test]
    fn test_rotation_matches_matrix() {
        let (yaw, pitch, roll) = (0.4, -0.2, 1.3);
        let from_quat = Quaternion::rotation(yaw, pitch, roll).to_matrix();
        let from_euler = Matrix4::rotation_yaw_pitch_roll(yaw, pitch, roll);
        assert_relative_eq!(from_quat, from_euler, epsilon = 1e-12);
    }

    #[test]
    fn test_slerp_same_input() {
        let q = Quaternion::new(0.5, 0.5, 0.5, 0.5);
        assert_eq!(Quaternion::slerp(q, q, 0.5), q);
        assert_eq!(Quaternion::slerp(q, q, 0.0), q);
    }

    #[test]
    fn test_slerp_halfway() {
        let z = Vector3::new(0.0, 0.0, 1.0);
        let q1 = QuaternionD::identity();
        let q2 = Quaternion::rotation_axis(z, FRAC_PI_2);
        let mid = Quaternion::slerp(q1, q2, 0.5);
        assert_relative_eq!(mid, Quaternion::rotation_axis(z, FRAC_PI_4), epsilon = 1e-12);
        assert!(approx_eq(mid.w, FRAC_PI_8.cos()));
    }

    #[test]
    fn test_slerp_keeps_long_arc() {
        let z = Vector3::new(0.0, 0.0, 1.0);
        let x = Vector3::new(1.0, 0.0, 0.0);
        let q1 = QuaternionD::identity();
        let q2 = Quaternion::rotation_axis(z, FRAC_PI_2);

        // -q2 is the same rotation as q2 but sits on the far side of q1
        let short = Quaternion::slerp(q1, q2, 0.5);
        let long = Quaternion::slerp(q1, -q2, 0.5);
        assert_relative_eq!(long, Quaternion::rotation_axis(z, -3.0 * FRAC_PI_4), epsilon = 1e-12);
        assert!(long.dot(short) < 0.5);
        assert!(!vec_approx_eq(rotate(long, x), rotate(short, x)));
    }

    #[test]
    fn test_slerp_endpoints() {
        let q1 = Quaternion::rotation_axis(Vector3::new(1.0, 0.0, 0.0), 0.3);
        let q2 = Quaternion::rotation_axis(Vector3::new(0.0, 1.0, 0.0), 1.1);
        assert_relative_eq!(Quaternion::slerp(q1, q2, 0.0), q1, epsilon = 1e-12);
        assert_relative_eq!(Quaternion::slerp(q1, q2, 1.0), q2, epsilon = 1e-12);
    }

    #[test]
    fn test_scalar_ops() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q * 2.0, Quaternion::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(2.0 * q, q * 2.0);
        assert_eq!((q * 2.0) / 2.0, q);
        assert_eq!(q + q - q, q);

        let mut acc = q;
        acc *= 4.0;
        acc /= 4.0;
        acc += q;
        acc -= q;
        acc *= Quaternion::identity();
        assert_eq!(acc, q);
    }

    #[test]
    fn test_display() {
        assert_eq!(Quaternion::new(1, 2, 3, 4).to_string(), "1, 2, 3, 4");
    }
}
