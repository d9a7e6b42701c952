//! lin3d - generic 2D/3D/4D math for graphics
//!
//! The value types live in [`lin3d_math`] and are re-exported here. This
//! crate adds the application-facing pieces:
//!
//! - [`config`] - layered configuration (TOML files and `LIN3D_*` env vars)
//! - [`logging`] - `env_logger` setup driven by the configuration
//! - [`strict`] - opt-in strict mode that turns degenerate input into errors
//!
//! ```no_run
//! use lin3d::prelude::*;
//!
//! let config = AppConfig::load().unwrap_or_default();
//! lin3d::logging::init(&config.logging);
//! let strict = StrictMode::from_config(&config.strict);
//!
//! let view = Matrix4F::view_lh(
//!     Vector3::new(0.0, 2.0, -5.0),
//!     Vector3::zero(),
//!     Vector3::unit_y(),
//! );
//! let inverse = strict.inverse(&view);
//! ```

pub mod config;
pub mod logging;
pub mod strict;

pub use lin3d_math::*;

/// Commonly used types
pub mod prelude {
    pub use crate::config::AppConfig;
    pub use crate::strict::StrictMode;
    pub use lin3d_math::{
        to_degree, to_radian, Color, ColorF, LineHit, MathError, Matrix4, Matrix4F, Plane, PlaneF,
        Quaternion, QuaternionF, Scalar, TriangleHit, Vector2, Vector2F, Vector3, Vector3F,
        Vector4, Vector4F,
    };
}
