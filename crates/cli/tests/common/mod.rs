//! Shared test utilities for dashboard-transporter integration tests.
//!
//! Invariants / Assumptions:
//! - `DOTENV_DISABLED=1` keeps a developer's local `.env` out of tests.
//! - Every `GRAFANA_*` tier variable is cleared; tests opt in per tier.

#![allow(dead_code)]

use assert_cmd::Command;
use wiremock::MockServer;

const TIERS: &[&str] = &["DEV", "HML", "PRD"];

/// Returns a hermetic `dashboard-transporter` command with no environments.
pub fn transporter_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("dashboard-transporter");
    cmd.env("DOTENV_DISABLED", "1");
    for tier in TIERS {
        for field in ["URL", "USER", "PASS", "PASSWORD"] {
            cmd.env_remove(format!("GRAFANA_{tier}_{field}"));
        }
    }
    cmd.env_remove("GRAFANA_TIMEOUT")
        .env_remove("GRAFANA_ORG_ID")
        .env_remove("GRAFANA_SKIP_VERIFY")
        .env_remove("RUST_LOG");
    cmd
}

/// Point tier `tier` (e.g. `"DEV"`) at `server` with `admin:admin`.
pub fn with_tier(cmd: &mut Command, tier: &str, server: &MockServer) {
    cmd.env(format!("GRAFANA_{tier}_URL"), server.uri())
        .env(format!("GRAFANA_{tier}_USER"), "admin")
        .env(format!("GRAFANA_{tier}_PASS"), "admin");
}
