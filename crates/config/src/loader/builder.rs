//! Builder for the process-wide [`Config`].
//!
//! Invariants:
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.
//! - Environments registered through `with_environment` shadow same-id tiers read from env vars.

use std::time::Duration;

use super::env::{apply_env, validate_base_url};
use super::error::ConfigError;
use crate::constants::{
    DEFAULT_ORG_ID, DEFAULT_TIMEOUT_SECS, DOTENV_DISABLED_VAR, MAX_TIMEOUT_SECS,
};
use crate::types::{Config, ConnectionConfig, Environment};

/// Configuration loader that builds config from environment variables and overrides.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    environments: Vec<Environment>,
    timeout: Option<Duration>,
    org_id: Option<String>,
    skip_verify: Option<bool>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(DOTENV_DISABLED_VAR).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the `.env` file exists but has invalid syntax or
    /// cannot be read. Missing `.env` files are silently ignored.
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read environments and connection settings from process environment variables.
    #[allow(clippy::wrong_self_convention)]
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Register an environment explicitly.
    ///
    /// Replaces any previously registered environment with the same id.
    pub fn with_environment(mut self, env: Environment) -> Self {
        self.environments.retain(|e| e.id != env.id);
        self.environments.push(env);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_org_id(mut self, org_id: String) -> Self {
        self.org_id = Some(org_id);
        self
    }

    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = Some(skip);
        self
    }

    pub(crate) fn add_environment_if_absent(&mut self, env: Environment) {
        if !self.environments.iter().any(|e| e.id == env.id) {
            self.environments.push(env);
        }
    }

    pub(crate) fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub(crate) fn org_id(&self) -> Option<&str> {
        self.org_id.as_deref()
    }

    pub(crate) fn set_org_id(&mut self, org_id: Option<String>) {
        self.org_id = org_id;
    }

    pub(crate) fn skip_verify(&self) -> Option<bool> {
        self.skip_verify
    }

    pub(crate) fn set_skip_verify(&mut self, skip: Option<bool>) {
        self.skip_verify = skip;
    }

    /// Build the final configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTimeout`] if the timeout is zero or above
    /// the maximum, and [`ConfigError::InvalidValue`] if an explicitly
    /// registered environment has an invalid URL.
    pub fn build(self) -> Result<Config, ConfigError> {
        let connection = ConnectionConfig {
            timeout: self
                .timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            org_id: self.org_id.unwrap_or_else(|| DEFAULT_ORG_ID.to_string()),
            skip_verify: self.skip_verify.unwrap_or(false),
        };
        Self::validate_timeout(connection.timeout)?;

        let mut environments = Vec::with_capacity(self.environments.len());
        for mut env in self.environments {
            env.url = validate_base_url(&format!("environment '{}'", env.id), &env.url)?;
            environments.push(env);
        }

        if environments.is_empty() {
            tracing::warn!("No environments configured (set GRAFANA_<TIER>_URL)");
        }
        for env in &environments {
            tracing::debug!(
                env = %env.id,
                url = %env.url,
                has_credentials = env.credentials().is_ok(),
                "Environment registered"
            );
        }

        Ok(Config {
            environments,
            connection,
        })
    }

    fn validate_timeout(timeout: Duration) -> Result<(), ConfigError> {
        let secs = timeout.as_secs();
        if secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                message: "must be greater than 0".to_string(),
            });
        }
        if secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                message: format!("must not exceed {MAX_TIMEOUT_SECS} seconds (got {secs})"),
            });
        }
        Ok(())
    }
}
