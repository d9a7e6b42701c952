//! Logger setup
//!
//! The math crate only talks to the `log` facade. Applications that want to
//! see its diagnostics call [`init`] (or [`init_with_level`]) once at startup.

use crate::config::LoggingConfig;

/// Install `env_logger` with the configured default level.
///
/// `RUST_LOG` still takes precedence. Calling this more than once is harmless;
/// only the first call installs a logger. Returns whether this call did.
pub fn init(config: &LoggingConfig) -> bool {
    init_with_level(&config.level)
}

/// Same as [`init`] with an explicit default filter such as `"debug"` or
/// `"lin3d_math=trace"`
pub fn init_with_level(level: &str) -> bool {
    let installed =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
            .try_init()
            .is_ok();
    if installed {
        log::debug!("Logger initialized (default level: {})", level);
    }
    installed
}
