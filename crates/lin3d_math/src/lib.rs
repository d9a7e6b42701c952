//! Generic 3D Mathematics Library
//!
//! Value types for 3D graphics and geometry, generic over a [`Scalar`]
//! (`u8`, `i32`, `f32`, `f64`).
//!
//! ## Core Types
//!
//! - [`Vector2`], [`Vector3`], [`Vector4`] - vectors with the usual arithmetic
//! - [`Matrix4`] - row-major 4x4 matrix; view, projection and viewport builders
//! - [`Quaternion`] - rotations, Euler/axis construction and slerp
//! - [`Plane`] - plane equation `ax + by + cz + d = 0`
//! - [`Color`] - RGBA color arithmetic
//!
//! Vectors are row vectors: a point is transformed as `v * M`.
//!
//! ## Errors
//!
//! Plain operations never fail; degenerate input yields a zero/identity value
//! or `None`. The `try_*` variants report a [`MathError`] instead.

#[macro_use]
mod macros;

mod angle;
mod color;
mod error;
mod matrix4;
mod plane;
mod quaternion;
mod scalar;
mod vector2;
mod vector3;
mod vector4;

pub use angle::{to_degree, to_radian, PI};
pub use color::{Color, ColorD, ColorF, ColorI, ColorU8};
pub use error::MathError;
pub use matrix4::{Matrix4, Matrix4D, Matrix4F, Matrix4I, Matrix4U8};
pub use plane::{LineHit, Plane, PlaneD, PlaneF, PlaneI, PlaneU8};
pub use quaternion::{Quaternion, QuaternionD, QuaternionF, QuaternionI, QuaternionU8};
pub use scalar::Scalar;
pub use vector2::{Vector2, Vector2D, Vector2F, Vector2I, Vector2U8};
pub use vector3::{TriangleHit, Vector3, Vector3D, Vector3F, Vector3I, Vector3U8};
pub use vector4::{Vector4, Vector4D, Vector4F, Vector4I, Vector4U8};
