//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read the per-tier `GRAFANA_<TIER>_*` variables into [`Environment`] entries.
//! - Read the global connection settings.
//! - Provide helper functions for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Building the final Config (see builder.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed, except passwords which are taken verbatim.
//! - A tier without a URL is not configured; a tier with a URL is always registered.

use secrecy::SecretString;
use std::time::Duration;
use url::Url;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{ENV_PREFIX, KNOWN_TIERS, ORG_ID_VAR, SKIP_VERIFY_VAR, TIMEOUT_VAR};
use crate::types::Environment;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Read a secret verbatim; only a fully empty value counts as unset.
fn secret_var_or_none(key: &str) -> Option<SecretString> {
    std::env::var(key)
        .ok()
        .filter(|s| !s.is_empty())
        .map(|s| SecretString::new(s.into()))
}

/// Validate a base URL and strip trailing slashes.
pub(crate) fn validate_base_url(var: &str, raw: &str) -> Result<String, ConfigError> {
    let parsed = Url::parse(raw).map_err(|e| ConfigError::InvalidValue {
        var: var.to_string(),
        message: format!("not a valid URL ({e})"),
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidValue {
            var: var.to_string(),
            message: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }

    Ok(raw.trim_end_matches('/').to_string())
}

/// Read one tier (`GRAFANA_<SUFFIX>_URL`, `_USER`, `_PASS` or `_PASSWORD`).
fn read_tier(suffix: &str, display_name: &str) -> Result<Option<Environment>, ConfigError> {
    let url_var = format!("{ENV_PREFIX}_{suffix}_URL");
    let Some(raw_url) = env_var_or_none(&url_var) else {
        return Ok(None);
    };
    let url = validate_base_url(&url_var, &raw_url)?;

    let mut env = Environment::new(suffix.to_lowercase(), display_name, url);
    env.username = env_var_or_none(&format!("{ENV_PREFIX}_{suffix}_USER"));
    env.password = secret_var_or_none(&format!("{ENV_PREFIX}_{suffix}_PASS"))
        .or_else(|| secret_var_or_none(&format!("{ENV_PREFIX}_{suffix}_PASSWORD")));

    Ok(Some(env))
}

/// Apply environment variable configuration to the loader.
///
/// Values already set on the loader through `with_*` overrides are kept.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    for (suffix, display_name) in KNOWN_TIERS {
        if let Some(env) = read_tier(suffix, display_name)? {
            loader.add_environment_if_absent(env);
        }
    }

    if loader.timeout().is_none()
        && let Some(timeout) = env_var_or_none(TIMEOUT_VAR)
    {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: TIMEOUT_VAR.to_string(),
            message: "must be a number".to_string(),
        })?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if loader.org_id().is_none()
        && let Some(org) = env_var_or_none(ORG_ID_VAR)
    {
        loader.set_org_id(Some(org));
    }
    if loader.skip_verify().is_none()
        && let Some(skip) = env_var_or_none(SKIP_VERIFY_VAR)
    {
        loader.set_skip_verify(Some(skip.parse().map_err(|_| {
            ConfigError::InvalidValue {
                var: SKIP_VERIFY_VAR.to_string(),
                message: "must be true or false".to_string(),
            }
        })?));
    }

    Ok(())
}
