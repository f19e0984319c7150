//! Validation tests for configuration values.

use serial_test::serial;
use std::time::Duration;

use super::with_grafana_env;
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;

#[test]
#[serial]
fn test_invalid_url_rejected() {
    with_grafana_env(&[("GRAFANA_DEV_URL", "not a url")], || {
        let err = ConfigLoader::new().from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref var, .. } if var == "GRAFANA_DEV_URL"));
    });
}

#[test]
#[serial]
fn test_unsupported_scheme_rejected() {
    with_grafana_env(&[("GRAFANA_PRD_URL", "ftp://prd.example.com")], || {
        let err = ConfigLoader::new().from_env().unwrap_err();
        assert!(err.to_string().contains("unsupported scheme"));
    });
}

#[test]
#[serial]
fn test_non_numeric_timeout_rejected() {
    with_grafana_env(&[("GRAFANA_TIMEOUT", "soon")], || {
        let err = ConfigLoader::new().from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref var, .. } if var == "GRAFANA_TIMEOUT"));
    });
}

#[test]
#[serial]
fn test_invalid_skip_verify_rejected() {
    with_grafana_env(&[("GRAFANA_SKIP_VERIFY", "maybe")], || {
        assert!(ConfigLoader::new().from_env().is_err());
    });
}

#[test]
fn test_zero_timeout_rejected() {
    let err = ConfigLoader::new()
        .with_timeout(Duration::from_secs(0))
        .build()
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidTimeout { .. }));
}

#[test]
fn test_excessive_timeout_rejected() {
    let err = ConfigLoader::new()
        .with_timeout(Duration::from_secs(7200))
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("must not exceed"));
}

#[test]
fn test_empty_registry_is_not_an_error() {
    let config = ConfigLoader::new().build().unwrap();
    assert!(config.environments.is_empty());
    assert_eq!(config.connection.org_id, "1");
}
