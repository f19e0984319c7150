//! Batch and per-item error types.
//!
//! [`BatchError`] is the only failure that rejects a whole batch, and it is
//! raised before any dashboard is processed. [`MigrationError`] describes
//! what went wrong with a single dashboard; the orchestrator renders it into
//! that item's [`crate::ItemResult`] message and moves on.

use crate::reconciler::ReconcileWarning;
use crate::resolver::ResolveError;
use grafana_client::ClientError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BatchError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("unknown environment '{0}'")]
    UnknownEnvironment(String),

    #[error("environment '{env}' is not usable: {reason}")]
    EnvironmentUnavailable { env: String, reason: String },
}

/// Failure of one dashboard's migration.
///
/// Transport, upstream, decode and empty-result causes are carried by the
/// wrapped [`ClientError`]; grantee lookup failures by [`ReconcileWarning`].
#[derive(Error, Debug)]
pub enum MigrationError {
    /// The definition could not be read; nothing was written to the target.
    #[error("source get failed: {0}")]
    SourceFetch(#[source] ClientError),

    /// The target rejected the import.
    #[error("target import failed: {0}")]
    TargetImport(#[source] ClientError),

    /// Imported, but the target-local id could not be determined.
    #[error("rbac failed: {0}")]
    Resolve(#[source] ResolveError),

    /// Imported, but permissions were not (fully) applied.
    #[error("rbac failed: {0}")]
    Reconcile(#[source] ReconcileWarning),
}

impl MigrationError {
    /// Whether the dashboard never made it onto the target.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::SourceFetch(_) | Self::TargetImport(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_messages() {
        let err = MigrationError::SourceFetch(ClientError::ApiError {
            status: 404,
            url: "http://g/api/dashboards/uid/x".into(),
            body: "not found".into(),
        });
        assert_eq!(err.to_string(), "source get failed: grafana api 404: not found");
        assert!(err.is_fatal());

        let err = MigrationError::Resolve(ResolveError { attempts: vec![] });
        assert_eq!(err.to_string(), "rbac failed: dashboard id not found");
        assert!(!err.is_fatal());
    }
}
