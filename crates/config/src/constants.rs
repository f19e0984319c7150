//! Centralized constants for the Dashboard Transporter workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Organization used when nothing else scopes the request.
pub const DEFAULT_ORG_ID: &str = "1";

// =============================================================================
// Environment Registry
// =============================================================================

/// Prefix shared by every per-tier environment variable.
pub const ENV_PREFIX: &str = "GRAFANA";

/// Deployment tiers read from the environment, as `(suffix, display name)`.
///
/// The environment id is the lowercased suffix (`dev`, `hml`, `prd`).
pub const KNOWN_TIERS: &[(&str, &str)] = &[
    ("DEV", "Grafana DEV"),
    ("HML", "Grafana HML"),
    ("PRD", "Grafana PRD"),
];

// =============================================================================
// Global Settings Variables
// =============================================================================

pub const TIMEOUT_VAR: &str = "GRAFANA_TIMEOUT";
pub const ORG_ID_VAR: &str = "GRAFANA_ORG_ID";
pub const SKIP_VERIFY_VAR: &str = "GRAFANA_SKIP_VERIFY";
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";
