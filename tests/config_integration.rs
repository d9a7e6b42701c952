//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use lin3d::config::AppConfig;
use lin3d::strict::StrictMode;
use lin3d::{MathError, Vector3};
use serial_test::serial;

#[test]
#[serial]
fn test_default_file_loading() {
    std::env::remove_var("LIN3D_STRICT__ENABLED");
    std::env::remove_var("LIN3D_LOGGING__LEVEL");

    let config = AppConfig::load().unwrap();
    assert!(!config.strict.enabled);
    assert_eq!(config.strict.epsilon, 1e-6);
}

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("LIN3D_STRICT__ENABLED", "true");
    std::env::set_var("LIN3D_LOGGING__LEVEL", "trace");
    let config = AppConfig::load();
    std::env::remove_var("LIN3D_STRICT__ENABLED");
    std::env::remove_var("LIN3D_LOGGING__LEVEL");

    let config = config.unwrap();
    assert!(config.strict.enabled);
    assert_eq!(config.logging.level, "trace");
}

#[test]
#[serial]
fn test_strict_mode_from_env() {
    std::env::set_var("LIN3D_STRICT__ENABLED", "true");
    std::env::set_var("LIN3D_STRICT__EPSILON", "0.5");
    let config = AppConfig::load();
    std::env::remove_var("LIN3D_STRICT__ENABLED");
    std::env::remove_var("LIN3D_STRICT__EPSILON");

    let strict = StrictMode::from_config(&config.unwrap().strict);
    assert_eq!(strict.epsilon(), 0.5);
    assert_eq!(
        strict.normalize3(Vector3::new(0.25f64, 0.0, 0.0)),
        Err(MathError::ZeroLength)
    );
}

#[test]
#[serial]
fn test_invalid_env_value() {
    std::env::set_var("LIN3D_STRICT__EPSILON", "not-a-number");
    let result = AppConfig::load();
    std::env::remove_var("LIN3D_STRICT__EPSILON");

    let err = result.unwrap_err();
    assert!(err.to_string().contains("Configuration error"));
}
