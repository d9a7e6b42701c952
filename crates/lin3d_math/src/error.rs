//! Error types for the checked (`try_*`) operations
//!
//! The plain operations never fail: they return a zero/identity value or
//! `None` on degenerate input. The checked variants report the reason instead.

use std::fmt;

/// Reason a checked operation rejected its input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    /// Normalizing a vector or quaternion whose length is (near) zero
    ZeroLength,
    /// Inverting a matrix whose determinant is (near) zero
    Singular { determinant: f64 },
    /// A homogeneous transform produced `w == 0`
    ZeroW,
    /// A ray runs parallel to the plane or triangle it was tested against
    ParallelRay,
    /// Three points are collinear (or coincide) and span no plane
    DegenerateTriangle,
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::ZeroLength => write!(f, "cannot normalize a zero-length value"),
            MathError::Singular { determinant } => {
                write!(f, "matrix is singular (determinant {})", determinant)
            }
            MathError::ZeroW => write!(f, "homogeneous transform produced w = 0"),
            MathError::ParallelRay => write!(f, "ray is parallel to the surface"),
            MathError::DegenerateTriangle => write!(f, "points do not span a plane"),
        }
    }
}

impl std::error::Error for MathError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singular_display() {
        let err = MathError::Singular { determinant: 0.0 };
        let msg = format!("{}", err);
        assert!(msg.contains("singular"));
        assert!(msg.contains('0'));
    }

    #[test]
    fn test_display_is_distinct() {
        let all = [
            MathError::ZeroLength,
            MathError::Singular { determinant: 1e-9 },
            MathError::ZeroW,
            MathError::ParallelRay,
            MathError::DegenerateTriangle,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.to_string(), b.to_string());
            }
        }
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(MathError::ParallelRay);
        assert!(err.source().is_none());
        assert_eq!(err.to_string(), "ray is parallel to the surface");
    }
}
