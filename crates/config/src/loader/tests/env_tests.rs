//! Environment variable tests for the configuration loader.

use secrecy::ExposeSecret;
use serial_test::serial;
use std::time::Duration;

use super::with_grafana_env;
use crate::loader::builder::ConfigLoader;
use crate::loader::env::env_var_or_none;
use crate::types::{Credentials, Environment};

#[test]
#[serial]
fn test_reads_all_three_tiers() {
    with_grafana_env(
        &[
            ("GRAFANA_DEV_URL", "https://dev.example.com/"),
            ("GRAFANA_DEV_USER", "admin"),
            ("GRAFANA_DEV_PASS", "dev-pass"),
            ("GRAFANA_HML_URL", "https://hml.example.com"),
            ("GRAFANA_HML_USER", "admin"),
            ("GRAFANA_HML_PASS", "hml-pass"),
            ("GRAFANA_PRD_URL", "https://prd.example.com"),
            ("GRAFANA_PRD_USER", "admin"),
            ("GRAFANA_PRD_PASS", "prd-pass"),
        ],
        || {
            let config = ConfigLoader::new().from_env().unwrap().build().unwrap();

            let ids: Vec<&str> = config.environments.iter().map(|e| e.id.as_str()).collect();
            assert_eq!(ids, vec!["dev", "hml", "prd"]);
            let dev = config.environment("dev").unwrap();
            assert_eq!(dev.name, "Grafana DEV");
            assert_eq!(dev.url, "https://dev.example.com");
            assert_eq!(
                dev.credentials().unwrap().password.expose_secret(),
                "dev-pass"
            );
        },
    );
}

#[test]
#[serial]
fn test_tier_without_url_is_skipped() {
    with_grafana_env(
        &[
            ("GRAFANA_DEV_USER", "admin"),
            ("GRAFANA_DEV_PASS", "dev-pass"),
            ("GRAFANA_PRD_URL", "https://prd.example.com"),
        ],
        || {
            let config = ConfigLoader::new().from_env().unwrap().build().unwrap();
            assert_eq!(config.environments.len(), 1);
            assert!(config.environment("prd").is_some());
        },
    );
}

#[test]
#[serial]
fn test_password_fallback_variable() {
    with_grafana_env(
        &[
            ("GRAFANA_HML_URL", "http://hml.internal:3000"),
            ("GRAFANA_HML_USER", "svc"),
            ("GRAFANA_HML_PASSWORD", "legacy"),
        ],
        || {
            let config = ConfigLoader::new().from_env().unwrap().build().unwrap();
            let creds = config.environment("hml").unwrap().credentials().unwrap();
            assert_eq!(creds.password.expose_secret(), "legacy");
        },
    );
}

#[test]
#[serial]
fn test_pass_preferred_over_password() {
    with_grafana_env(
        &[
            ("GRAFANA_HML_URL", "http://hml.internal:3000"),
            ("GRAFANA_HML_USER", "svc"),
            ("GRAFANA_HML_PASS", "preferred"),
            ("GRAFANA_HML_PASSWORD", "legacy"),
        ],
        || {
            let config = ConfigLoader::new().from_env().unwrap().build().unwrap();
            let creds = config.environment("hml").unwrap().credentials().unwrap();
            assert_eq!(creds.password.expose_secret(), "preferred");
        },
    );
}

#[test]
#[serial]
fn test_missing_user_still_registers_environment() {
    with_grafana_env(&[("GRAFANA_DEV_URL", "https://dev.example.com")], || {
        let config = ConfigLoader::new().from_env().unwrap().build().unwrap();
        let dev = config.environment("dev").unwrap();
        assert!(dev.credentials().is_err());
    });
}

#[test]
#[serial]
fn test_whitespace_values_treated_as_unset() {
    with_grafana_env(&[("GRAFANA_DEV_URL", "   ")], || {
        let config = ConfigLoader::new().from_env().unwrap().build().unwrap();
        assert!(config.environments.is_empty());
    });
}

#[test]
#[serial]
fn test_global_connection_settings() {
    with_grafana_env(
        &[
            ("GRAFANA_TIMEOUT", "45"),
            ("GRAFANA_ORG_ID", "7"),
            ("GRAFANA_SKIP_VERIFY", "true"),
        ],
        || {
            let config = ConfigLoader::new().from_env().unwrap().build().unwrap();
            assert_eq!(config.connection.timeout, Duration::from_secs(45));
            assert_eq!(config.connection.org_id, "7");
            assert!(config.connection.skip_verify);
        },
    );
}

#[test]
#[serial]
fn test_overrides_take_precedence_over_env() {
    with_grafana_env(
        &[
            ("GRAFANA_TIMEOUT", "45"),
            ("GRAFANA_DEV_URL", "https://dev.example.com"),
        ],
        || {
            let config = ConfigLoader::new()
                .with_timeout(Duration::from_secs(5))
                .with_environment(
                    Environment::new("dev", "Local", "http://localhost:3000")
                        .with_credentials(Credentials::new("a", "b")),
                )
                .from_env()
                .unwrap()
                .build()
                .unwrap();

            assert_eq!(config.connection.timeout, Duration::from_secs(5));
            assert_eq!(config.environments.len(), 1);
            assert_eq!(config.environment("dev").unwrap().url, "http://localhost:3000");
        },
    );
}

#[test]
#[serial]
fn test_env_var_or_none_trims() {
    temp_env::with_var("TRANSPORTER_TEST_VALUE", Some("  padded  "), || {
        assert_eq!(
            env_var_or_none("TRANSPORTER_TEST_VALUE"),
            Some("padded".to_string())
        );
    });
}
