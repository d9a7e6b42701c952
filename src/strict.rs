//! Opt-in strict mode
//!
//! The math types answer degenerate input with a silent fallback (zero vector,
//! identity quaternion, `None`). [`StrictMode`] routes the same calls through
//! the checked `try_*` operations when enabled, so callers that would rather
//! fail loudly get a [`MathError`] instead.

use lin3d_math::{
    LineHit, MathError, Matrix4, Plane, Quaternion, Scalar, TriangleHit, Vector2, Vector3, Vector4,
};

use crate::config::StrictConfig;

/// Dispatches between the silent and the checked operations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrictMode {
    enabled: bool,
    epsilon: f64,
}

impl Default for StrictMode {
    fn default() -> Self {
        Self::from_config(&StrictConfig::default())
    }
}

impl From<&StrictConfig> for StrictMode {
    fn from(config: &StrictConfig) -> Self {
        Self::from_config(config)
    }
}

impl StrictMode {
    pub fn from_config(config: &StrictConfig) -> Self {
        Self {
            enabled: config.enabled,
            epsilon: config.epsilon,
        }
    }

    /// Strict mode with the given tolerance
    pub fn enabled(epsilon: f64) -> Self {
        Self { enabled: true, epsilon }
    }

    /// Silent fallbacks everywhere
    pub fn disabled() -> Self {
        Self { enabled: false, epsilon: 0.0 }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Tolerance in the scalar type of the call (0 for integral scalars)
    fn eps<T: Scalar>(&self) -> T {
        T::from_f64(self.epsilon)
    }

    pub fn normalize2<T: Scalar>(&self, v: Vector2<T>) -> Result<Vector2<T>, MathError> {
        if self.enabled {
            v.try_normalize(self.eps())
        } else {
            Ok(v.normalize())
        }
    }

    pub fn normalize3<T: Scalar>(&self, v: Vector3<T>) -> Result<Vector3<T>, MathError> {
        if self.enabled {
            v.try_normalize(self.eps())
        } else {
            Ok(v.normalize())
        }
    }

    pub fn normalize4<T: Scalar>(&self, v: Vector4<T>) -> Result<Vector4<T>, MathError> {
        if self.enabled {
            v.try_normalize(self.eps())
        } else {
            Ok(v.normalize())
        }
    }

    pub fn normalize_quaternion<T: Scalar>(
        &self,
        q: Quaternion<T>,
    ) -> Result<Quaternion<T>, MathError> {
        if self.enabled {
            q.try_normalize(self.eps())
        } else {
            Ok(q.normalize())
        }
    }

    /// Matrix inverse. A singular matrix is an error in both modes since there
    /// is no fallback value; strict mode also rejects `|det| <= epsilon`.
    pub fn inverse<T: Scalar>(&self, m: &Matrix4<T>) -> Result<Matrix4<T>, MathError> {
        if self.enabled {
            return m.try_inverse(self.eps());
        }
        match m.inverse_and_determinant() {
            (Some(inv), _) => Ok(inv),
            (None, det) => Err(MathError::Singular { determinant: det.to_f64() }),
        }
    }

    pub fn plane_from_points<T: Scalar>(
        &self,
        points: [Vector3<T>; 3],
    ) -> Result<Plane<T>, MathError> {
        if self.enabled {
            Plane::try_from_points(points, self.eps())
        } else {
            Ok(Plane::from_points(points))
        }
    }

    /// Ray/plane test. Disabled: a parallel ray is `Ok(None)`. Enabled: a
    /// (nearly) parallel ray is [`MathError::ParallelRay`].
    pub fn intersect_line<T: Scalar>(
        &self,
        plane: Plane<T>,
        org: Vector3<T>,
        dir: Vector3<T>,
    ) -> Result<Option<LineHit<T>>, MathError> {
        if self.enabled {
            plane.try_intersect_line(org, dir, self.eps()).map(Some)
        } else {
            Ok(plane.intersect_line(org, dir))
        }
    }

    /// Ray/triangle test. A miss is `Ok(None)` in both modes; a parallel ray
    /// is an error only when enabled.
    pub fn intersect_tri<T: Scalar>(
        &self,
        tri: [Vector3<T>; 3],
        org: Vector3<T>,
        dir: Vector3<T>,
    ) -> Result<Option<TriangleHit<T>>, MathError> {
        let [v0, v1, v2] = tri;
        if self.enabled {
            Vector3::try_intersect_tri(v0, v1, v2, org, dir)
        } else {
            Ok(Vector3::intersect_tri(v0, v1, v2, org, dir))
        }
    }
}
