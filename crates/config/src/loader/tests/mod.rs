//! Tests for the configuration loader.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Every test clears all tier variables first so the host environment cannot leak in.

use crate::constants::{ENV_PREFIX, KNOWN_TIERS, ORG_ID_VAR, SKIP_VERIFY_VAR, TIMEOUT_VAR};

pub mod env_tests;
pub mod validation_tests;

/// Run `f` with every known variable unset except the ones in `vars`.
pub fn with_grafana_env<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
    let mut all: Vec<(String, Option<String>)> = Vec::new();
    for (suffix, _) in KNOWN_TIERS {
        for field in ["URL", "USER", "PASS", "PASSWORD"] {
            all.push((format!("{ENV_PREFIX}_{suffix}_{field}"), None));
        }
    }
    for key in [TIMEOUT_VAR, ORG_ID_VAR, SKIP_VERIFY_VAR] {
        all.push((key.to_string(), None));
    }

    for (key, value) in vars {
        match all.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = Some((*value).to_string()),
            None => all.push(((*key).to_string(), Some((*value).to_string()))),
        }
    }

    temp_env::with_vars(all, f);
}
