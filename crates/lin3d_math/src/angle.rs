//! Degree/radian conversion

use crate::Scalar;

/// π in double precision
pub const PI: f64 = std::f64::consts::PI;

/// Convert degrees to radians
#[inline]
pub fn to_radian<T: Scalar>(degree: T) -> T {
    T::from_f64(PI * degree.to_f64() / 180.0)
}

/// Convert radians to degrees
#[inline]
pub fn to_degree<T: Scalar>(rad: T) -> T {
    T::from_f64(rad.to_f64() * 180.0 / PI)
}
