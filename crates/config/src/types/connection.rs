//! Connection settings shared by every environment.
//!
//! Responsibilities:
//! - Define per-call timeout, organization scope and TLS verification settings.
//! - Define the main `Config` structure combining the registry and connection settings.
//!
//! Invariants:
//! - Duration fields are serialized as seconds (integers).
//! - Default values come from `constants`, not magic numbers.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::constants::{DEFAULT_ORG_ID, DEFAULT_TIMEOUT_SECS};
use crate::types::Environment;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Connection configuration applied to every platform instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Per-call timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
    /// Organization sent as `X-Grafana-Org-Id`
    pub org_id: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    pub skip_verify: bool,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            org_id: DEFAULT_ORG_ID.to_string(),
            skip_verify: false,
        }
    }
}

/// Process-wide configuration: the environment registry plus connection settings.
///
/// Constructed once at startup and shared read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub environments: Vec<Environment>,
    pub connection: ConnectionConfig,
}

impl Config {
    /// Look up an environment by its id.
    pub fn environment(&self, id: &str) -> Option<&Environment> {
        self.environments.iter().find(|e| e.id == id)
    }
}
