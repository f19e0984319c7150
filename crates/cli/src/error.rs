//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to tell outcomes apart.
//! - Map batch summaries and error chains to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//! - Signal handling (see cancellation.rs for SIGINT handling).
//!
//! Invariants:
//! - A batch that ran returns 0, 2 or 3 depending on its worst item.
//! - Exit code 130 is reserved for SIGINT (Unix standard: 128 + SIGINT).

use dashboard_transport::{BatchError, BatchSummary};
use transporter_config::ConfigError;

/// Structured exit codes for dashboard-transporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Every item succeeded (or the command had no items).
    Success = 0,

    /// General error, including request-level batch rejection.
    GeneralError = 1,

    /// The batch ran; at least one item has a warning and none failed.
    ///
    /// Dashboards are on the target but access may be missing.
    CompletedWithWarnings = 2,

    /// The batch ran; at least one dashboard was not migrated.
    CompletedWithErrors = 3,

    /// Configuration could not be loaded or is unusable.
    ConfigError = 4,

    /// Interrupted - SIGINT/Ctrl+C (Unix standard: 128 + 2).
    Interrupted = 130,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }

    pub fn from_summary(summary: &BatchSummary) -> Self {
        if summary.error > 0 {
            ExitCode::CompletedWithErrors
        } else if summary.warning > 0 {
            ExitCode::CompletedWithWarnings
        } else {
            ExitCode::Success
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if cause.is::<ConfigError>() {
                return ExitCode::ConfigError;
            }
            if let Some(batch_err) = cause.downcast_ref::<BatchError>() {
                return match batch_err {
                    BatchError::EnvironmentUnavailable { .. } => ExitCode::ConfigError,
                    _ => ExitCode::GeneralError,
                };
            }
        }
        ExitCode::GeneralError
    }
}
