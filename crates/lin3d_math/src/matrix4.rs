//! 4x4 Matrix for affine and projective transformations
//!
//! Storage is row-major and vectors are treated as row vectors, so a point is
//! transformed as `v * M` and the translation lives in the fourth row
//! (`_41, _42, _43`). Composition `A * B` therefore applies `A` first.
//!
//! View and projection builders come in left-handed (`_lh`) and right-handed
//! (`_rh`) variants. Trigonometry is evaluated in `f64` and cast back to the
//! scalar type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

use crate::{MathError, Quaternion, Scalar, Vector3, Vector4};

/// 4x4 matrix, row-major; element `(row, col)` is `m[row * 4 + col]`
#[repr(C)]
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Matrix4<T> {
    pub m: [T; 16],
}

impl_pod!(Matrix4);
impl_scalar_lhs_mul!(Matrix4);

pub type Matrix4U8 = Matrix4<u8>;
pub type Matrix4I = Matrix4<i32>;
pub type Matrix4F = Matrix4<f32>;
pub type Matrix4D = Matrix4<f64>;

impl<T: Scalar> Default for Matrix4<T> {
    /// The zero matrix
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar> Matrix4<T> {
    /// Create a matrix from its sixteen elements in row order
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    #[inline]
    pub fn new(
        m11: T, m12: T, m13: T, m14: T,
        m21: T, m22: T, m23: T, m24: T,
        m31: T, m32: T, m33: T, m34: T,
        m41: T, m42: T, m43: T, m44: T,
    ) -> Self {
        Self {
            m: [
                m11, m12, m13, m14,
                m21, m22, m23, m24,
                m31, m32, m33, m34,
                m41, m42, m43, m44,
            ],
        }
    }

    #[inline]
    pub fn from_array(m: [T; 16]) -> Self {
        Self { m }
    }

    pub fn from_rows(rows: [[T; 4]; 4]) -> Self {
        let mut m = [T::zero(); 16];
        for (i, row) in rows.iter().enumerate() {
            m[i * 4..i * 4 + 4].copy_from_slice(row);
        }
        Self { m }
    }

    pub fn to_rows(&self) -> [[T; 4]; 4] {
        let mut rows = [[T::zero(); 4]; 4];
        for (i, row) in rows.iter_mut().enumerate() {
            row.copy_from_slice(&self.m[i * 4..i * 4 + 4]);
        }
        rows
    }

    #[inline]
    pub fn zero() -> Self {
        Self { m: [T::zero(); 16] }
    }

    /// Identity matrix
    #[rustfmt::skip]
    pub fn identity() -> Self {
        let (o, l) = (T::zero(), T::one());
        Self::new(
            l, o, o, o,
            o, l, o, o,
            o, o, l, o,
            o, o, o, l,
        )
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.m[row * 4 + col]
    }

    #[inline]
    pub fn row(&self, row: usize) -> Vector4<T> {
        Vector4::new(self.get(row, 0), self.get(row, 1), self.get(row, 2), self.get(row, 3))
    }

    #[inline]
    pub fn column(&self, col: usize) -> Vector4<T> {
        Vector4::new(self.get(0, col), self.get(1, col), self.get(2, col), self.get(3, col))
    }

    /// Identity with the translation in the fourth row
    #[rustfmt::skip]
    pub fn translation(x: T, y: T, z: T) -> Self {
        let (o, l) = (T::zero(), T::one());
        Self::new(
            l, o, o, o,
            o, l, o, o,
            o, o, l, o,
            x, y, z, l,
        )
    }

    #[inline]
    pub fn translation_vector(v: Vector3<T>) -> Self {
        Self::translation(v.x, v.y, v.z)
    }

    /// Rotation about the X axis by `rad` radians
    #[rustfmt::skip]
    pub fn rotation_x(rad: T) -> Self {
        let (o, l) = (T::zero(), T::one());
        let (s, c) = sin_cos(rad);
        Self::new(
            l, o,          o, o,
            o, c,          s, o,
            o, s.negate(), c, o,
            o, o,          o, l,
        )
    }

    /// Rotation about the Y axis by `rad` radians
    #[rustfmt::skip]
    pub fn rotation_y(rad: T) -> Self {
        let (o, l) = (T::zero(), T::one());
        let (s, c) = sin_cos(rad);
        Self::new(
            c, o, s.negate(), o,
            o, l, o,          o,
            s, o, c,          o,
            o, o, o,          l,
        )
    }

    /// Rotation about the Z axis by `rad` radians
    #[rustfmt::skip]
    pub fn rotation_z(rad: T) -> Self {
        let (o, l) = (T::zero(), T::one());
        let (s, c) = sin_cos(rad);
        Self::new(
            c,          s, o, o,
            s.negate(), c, o, o,
            o,          o, l, o,
            o,          o, o, l,
        )
    }

    /// `Rz(roll) * Rx(pitch) * Ry(yaw)`
    pub fn rotation_yaw_pitch_roll(yaw: T, pitch: T, roll: T) -> Self {
        Self::rotation_z(roll) * Self::rotation_x(pitch) * Self::rotation_y(yaw)
    }

    /// Rotation about a unit `axis`, built through the equivalent quaternion
    pub fn rotation_axis(axis: Vector3<T>, rad: T) -> Self {
        Quaternion::rotation_axis(axis, rad).to_matrix()
    }

    #[inline]
    pub fn rotation_quaternion(q: Quaternion<T>) -> Self {
        q.to_matrix()
    }

    pub fn scaling(sx: T, sy: T, sz: T) -> Self {
        let mut m = Self::identity();
        m.m[0] *= sx;
        m.m[5] *= sy;
        m.m[10] *= sz;
        m
    }

    #[inline]
    pub fn scaling_vector(v: Vector3<T>) -> Self {
        Self::scaling(v.x, v.y, v.z)
    }

    /// Full 4x4 determinant (24-term expansion)
    #[rustfmt::skip]
    pub fn determinant(&self) -> T {
        let [m11, m12, m13, m14, m21, m22, m23, m24, m31, m32, m33, m34, m41, m42, m43, m44] = self.m;

        let positive =
              m11 * m22 * m33 * m44 + m11 * m23 * m34 * m42 + m11 * m24 * m32 * m43
            + m12 * m21 * m34 * m43 + m12 * m23 * m31 * m44 + m12 * m24 * m33 * m41
            + m13 * m21 * m32 * m44 + m13 * m22 * m34 * m41 + m13 * m24 * m31 * m42
            + m14 * m21 * m33 * m42 + m14 * m22 * m31 * m43 + m14 * m23 * m32 * m41;
        let negative =
              m11 * m22 * m34 * m43 + m11 * m23 * m32 * m44 + m11 * m24 * m33 * m42
            + m12 * m21 * m33 * m44 + m12 * m23 * m34 * m41 + m12 * m24 * m31 * m43
            + m13 * m21 * m34 * m42 + m13 * m22 * m31 * m44 + m13 * m24 * m32 * m41
            + m14 * m21 * m32 * m43 + m14 * m22 * m33 * m41 + m14 * m23 * m31 * m42;

        positive - negative
    }

    /// Inverse via the adjugate. `None` when the determinant is exactly zero.
    #[inline]
    pub fn inverse(&self) -> Option<Self> {
        self.inverse_and_determinant().0
    }

    /// Inverse together with the determinant it was computed from. The
    /// determinant is always reported, also when the inverse is `None`.
    #[rustfmt::skip]
    pub fn inverse_and_determinant(&self) -> (Option<Self>, T) {
        let d = self.determinant();
        if d == T::zero() {
            return (None, d);
        }

        let [m11, m12, m13, m14, m21, m22, m23, m24, m31, m32, m33, m34, m41, m42, m43, m44] = self.m;

        let adjugate = Self::new(
            m22 * m33 * m44 + m23 * m34 * m42 + m24 * m32 * m43 - m22 * m34 * m43 - m23 * m32 * m44 - m24 * m33 * m42,
            m12 * m34 * m43 + m13 * m32 * m44 + m14 * m33 * m42 - m12 * m33 * m44 - m13 * m34 * m42 - m14 * m32 * m43,
            m12 * m23 * m44 + m13 * m24 * m42 + m14 * m22 * m43 - m12 * m24 * m43 - m13 * m22 * m44 - m14 * m23 * m42,
            m12 * m24 * m33 + m13 * m22 * m34 + m14 * m23 * m32 - m12 * m23 * m34 - m13 * m24 * m32 - m14 * m22 * m33,

            m21 * m34 * m43 + m23 * m31 * m44 + m24 * m33 * m41 - m21 * m33 * m44 - m23 * m34 * m41 - m24 * m31 * m43,
            m11 * m33 * m44 + m13 * m34 * m41 + m14 * m31 * m43 - m11 * m34 * m43 - m13 * m31 * m44 - m14 * m33 * m41,
            m11 * m24 * m43 + m13 * m21 * m44 + m14 * m23 * m41 - m11 * m23 * m44 - m13 * m24 * m41 - m14 * m21 * m43,
            m11 * m23 * m34 + m13 * m24 * m31 + m14 * m21 * m33 - m11 * m24 * m33 - m13 * m21 * m34 - m14 * m23 * m31,

            m21 * m32 * m44 + m22 * m34 * m41 + m24 * m31 * m42 - m21 * m34 * m42 - m22 * m31 * m44 - m24 * m32 * m41,
            m11 * m34 * m42 + m12 * m31 * m44 + m14 * m32 * m41 - m11 * m32 * m44 - m12 * m34 * m41 - m14 * m31 * m42,
            m11 * m22 * m44 + m12 * m24 * m41 + m14 * m21 * m42 - m11 * m24 * m42 - m12 * m21 * m44 - m14 * m22 * m41,
            m11 * m24 * m32 + m12 * m21 * m34 + m14 * m22 * m31 - m11 * m22 * m34 - m12 * m24 * m31 - m14 * m21 * m32,

            m21 * m33 * m42 + m22 * m31 * m43 + m23 * m32 * m41 - m21 * m32 * m43 - m22 * m33 * m41 - m23 * m31 * m42,
            m11 * m32 * m43 + m12 * m33 * m41 + m13 * m31 * m42 - m11 * m33 * m42 - m12 * m31 * m43 - m13 * m32 * m41,
            m11 * m23 * m42 + m12 * m21 * m43 + m13 * m22 * m41 - m11 * m22 * m43 - m12 * m23 * m41 - m13 * m21 * m42,
            m11 * m22 * m33 + m12 * m23 * m31 + m13 * m21 * m32 - m11 * m23 * m32 - m12 * m21 * m33 - m13 * m22 * m31,
        );

        (Some(adjugate / d), d)
    }

    /// Inverse that fails when `|det| <= epsilon`
    pub fn try_inverse(&self, epsilon: T) -> Result<Self, MathError> {
        let d = self.determinant();
        if d.abs() <= epsilon {
            log::trace!("Matrix4::try_inverse rejected, determinant {}", d);
            return Err(MathError::Singular { determinant: d.to_f64() });
        }
        match self.inverse_and_determinant() {
            (Some(inv), _) => Ok(inv),
            (None, d) => Err(MathError::Singular { determinant: d.to_f64() }),
        }
    }

    /// Left-handed look-at view matrix
    pub fn view_lh(eye: Vector3<T>, look_at: Vector3<T>, up: Vector3<T>) -> Self {
        Self::view(eye, (look_at - eye).normalize(), up)
    }

    /// Right-handed look-at view matrix
    pub fn view_rh(eye: Vector3<T>, look_at: Vector3<T>, up: Vector3<T>) -> Self {
        Self::view(eye, (eye - look_at).normalize(), up)
    }

    /// Basis change into the camera frame given its (unit) z axis
    #[rustfmt::skip]
    fn view(eye: Vector3<T>, axis_z: Vector3<T>, up: Vector3<T>) -> Self {
        let axis_x = up.cross(axis_z).normalize();
        let axis_y = axis_z.cross(axis_x);
        let (o, l) = (T::zero(), T::one());

        Self::new(
            axis_x.x, axis_y.x, axis_z.x, o,
            axis_x.y, axis_y.y, axis_z.y, o,
            axis_x.z, axis_y.z, axis_z.z, o,
            axis_x.dot(eye).negate(), axis_y.dot(eye).negate(), axis_z.dot(eye).negate(), l,
        )
    }

    /// Left-handed perspective projection; depth maps `[zn, zf]` to `[0, 1]`
    #[rustfmt::skip]
    pub fn perspective_lh(fovy: T, aspect: T, zn: T, zf: T) -> Self {
        let (y, x) = focal_lengths(fovy, aspect);
        let o = T::zero();
        Self::new(
            x, o, o,                                o,
            o, y, o,                                o,
            o, o, zf / (zf - zn),                   T::one(),
            o, o, zn.negate() * zf / (zf - zn),     o,
        )
    }

    /// Right-handed perspective projection; depth maps `[-zn, -zf]` to `[0, 1]`
    #[rustfmt::skip]
    pub fn perspective_rh(fovy: T, aspect: T, zn: T, zf: T) -> Self {
        let (y, x) = focal_lengths(fovy, aspect);
        let o = T::zero();
        Self::new(
            x, o, o,                                o,
            o, y, o,                                o,
            o, o, zf / (zn - zf),                   T::one().negate(),
            o, o, zn.negate() * zf / (zf - zn),     o,
        )
    }

    /// Left-handed orthographic projection of a `w` x `h` view volume
    #[rustfmt::skip]
    pub fn ortho_lh(w: T, h: T, zn: T, zf: T) -> Self {
        let o = T::zero();
        Self::new(
            T::from_f64(2.0 / w.to_f64()), o, o, o,
            o, T::from_f64(2.0 / h.to_f64()), o, o,
            o, o, T::from_f64(1.0 / (zf - zn).to_f64()), o,
            o, o, T::from_f64(zn.to_f64() / (zn - zf).to_f64()), T::one(),
        )
    }

    /// Right-handed orthographic projection of a `w` x `h` view volume
    #[rustfmt::skip]
    pub fn ortho_rh(w: T, h: T, zn: T, zf: T) -> Self {
        let o = T::zero();
        Self::new(
            T::from_f64(2.0 / w.to_f64()), o, o, o,
            o, T::from_f64(2.0 / h.to_f64()), o, o,
            o, o, T::from_f64(1.0 / (zn - zf).to_f64()), o,
            o, o, T::from_f64(zn.to_f64() / (zn - zf).to_f64()), T::one(),
        )
    }

    /// Viewport transform from normalized device coordinates to pixels.
    /// Y is flipped so that NDC `(-1, 1)` lands on pixel `(0, 0)`.
    #[rustfmt::skip]
    pub fn screen(width: T, height: T) -> Self {
        let w = width / T::two();
        let h = height / T::two();
        let (o, l) = (T::zero(), T::one());
        Self::new(
            w, o,          o, o,
            o, h.negate(), o, o,
            o, o,          l, o,
            w, h,          o, l,
        )
    }

    pub fn transpose(&self) -> Self {
        let mut t = [T::zero(); 16];
        for i in 0..4 {
            for j in 0..4 {
                t[i * 4 + j] = self.m[j * 4 + i];
            }
        }
        Self { m: t }
    }

    pub fn cast<U: Scalar>(&self) -> Matrix4<U> {
        Matrix4 {
            m: self.m.map(|e| U::from_f64(e.to_f64())),
        }
    }
}

/// `(sin, cos)` of `rad` evaluated in double precision
fn sin_cos<T: Scalar>(rad: T) -> (T, T) {
    let (s, c) = rad.to_f64().sin_cos();
    (T::from_f64(s), T::from_f64(c))
}

/// `(y, x)` scale factors of a perspective projection
fn focal_lengths<T: Scalar>(fovy: T, aspect: T) -> (T, T) {
    let y = T::from_f64(1.0 / (fovy.to_f64() / 2.0).tan());
    (y, y / aspect)
}

impl<T: Scalar> PartialEq for Matrix4<T> {
    /// Bitwise comparison of all sixteen elements
    fn eq(&self, other: &Self) -> bool {
        bytemuck::bytes_of(self) == bytemuck::bytes_of(other)
    }
}

impl<T: Scalar> Index<(usize, usize)> for Matrix4<T> {
    type Output = T;
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.m[row * 4 + col]
    }
}

impl<T: Scalar> IndexMut<(usize, usize)> for Matrix4<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.m[row * 4 + col]
    }
}

impl<T: Scalar> Index<usize> for Matrix4<T> {
    type Output = T;
    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.m[i]
    }
}

impl<T: Scalar> IndexMut<usize> for Matrix4<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.m[i]
    }
}

impl<T: Scalar> fmt::Display for Matrix4<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..4 {
            if row > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{}, {}, {}, {}",
                self.get(row, 0),
                self.get(row, 1),
                self.get(row, 2),
                self.get(row, 3)
            )?;
        }
        Ok(())
    }
}

impl<T> approx::AbsDiffEq for Matrix4<T>
where
    T: Scalar + approx::AbsDiffEq<Epsilon = T>,
{
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.m
            .iter()
            .zip(other.m.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T> approx::RelativeEq for Matrix4<T>
where
    T: Scalar + approx::RelativeEq<Epsilon = T>,
{
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.m
            .iter()
            .zip(other.m.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

// Operator overloads

impl<T: Scalar> std::ops::Add for Matrix4<T> {
    type Output = Self;
    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl<T: Scalar> std::ops::AddAssign for Matrix4<T> {
    fn add_assign(&mut self, other: Self) {
        for (a, b) in self.m.iter_mut().zip(other.m) {
            *a = a.wrapping_add(b);
        }
    }
}

impl<T: Scalar> std::ops::Sub for Matrix4<T> {
    type Output = Self;
    fn sub(mut self, other: Self) -> Self {
        self -= other;
        self
    }
}

impl<T: Scalar> std::ops::SubAssign for Matrix4<T> {
    fn sub_assign(&mut self, other: Self) {
        for (a, b) in self.m.iter_mut().zip(other.m) {
            *a = a.wrapping_sub(b);
        }
    }
}

impl<T: Scalar> std::ops::Neg for Matrix4<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self {
            m: self.m.map(Scalar::negate),
        }
    }
}

/// `result[i][j] = row_i(self) · col_j(other)`
impl<T: Scalar> std::ops::Mul for Matrix4<T> {
    type Output = Self;
    #[allow(clippy::needless_range_loop)]
    fn mul(self, other: Self) -> Self {
        let (a, b) = (&self.m, &other.m);
        let mut result = [T::zero(); 16];

        for i in 0..4 {
            for j in 0..4 {
                result[i * 4 + j] = a[i * 4]
                    .wrapping_mul(b[j])
                    .wrapping_add(a[i * 4 + 1].wrapping_mul(b[4 + j]))
                    .wrapping_add(a[i * 4 + 2].wrapping_mul(b[8 + j]))
                    .wrapping_add(a[i * 4 + 3].wrapping_mul(b[12 + j]));
            }
        }

        Self { m: result }
    }
}

impl<T: Scalar> std::ops::MulAssign for Matrix4<T> {
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

impl<T: Scalar> std::ops::Mul<T> for Matrix4<T> {
    type Output = Self;
    fn mul(mut self, scalar: T) -> Self {
        self *= scalar;
        self
    }
}

impl<T: Scalar> std::ops::MulAssign<T> for Matrix4<T> {
    fn mul_assign(&mut self, scalar: T) {
        for a in self.m.iter_mut() {
            *a = a.wrapping_mul(scalar);
        }
    }
}

/// Multiplies by the reciprocal `1 / scalar`
impl<T: Scalar> std::ops::Div<T> for Matrix4<T> {
    type Output = Self;
    fn div(self, scalar: T) -> Self {
        self * (T::one() / scalar)
    }
}

impl<T: Scalar> std::ops::DivAssign<T> for Matrix4<T> {
    fn div_assign(&mut self, scalar: T) {
        *self *= T::one() / scalar;
    }
}
