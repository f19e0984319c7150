//! Batch request and per-item result types.
//!
//! Field names on the wire are camelCase so a request file written for the
//! HTTP front end of the original tool can be fed to the CLI unchanged.

use crate::error::BatchError;
use grafana_client::PermissionLevel;
use serde::{Deserialize, Serialize};

/// A batch migration of dashboards between two configured environments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRequest {
    #[serde(default)]
    pub source_env: String,
    #[serde(default)]
    pub target_env: String,
    /// Blank means the target's default folder.
    #[serde(default)]
    pub folder_uid: String,
    /// Raw requester list: logins or emails separated by commas,
    /// semicolons or whitespace. Blank skips permission reconciliation.
    #[serde(default)]
    pub requested_by: String,
    #[serde(default)]
    pub uids: Vec<String>,
    #[serde(default)]
    pub permission: PermissionLevel,
    /// Overrides the configured organization for both sides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_id: Option<String>,
}

impl BatchRequest {
    /// Reject malformed requests before any item is processed.
    pub fn validate(&self) -> Result<(), BatchError> {
        if self.source_env.trim().is_empty() {
            return Err(BatchError::InvalidRequest("sourceEnv is required".into()));
        }
        if self.target_env.trim().is_empty() {
            return Err(BatchError::InvalidRequest("targetEnv is required".into()));
        }
        if self.uids.is_empty() {
            return Err(BatchError::InvalidRequest("uids must not be empty".into()));
        }
        if let Some(pos) = self.uids.iter().position(|uid| uid.trim().is_empty()) {
            return Err(BatchError::InvalidRequest(format!(
                "uids[{pos}] is blank"
            )));
        }
        if self.permission.value() == 0 {
            return Err(BatchError::InvalidRequest(
                "permission must be positive".into(),
            ));
        }
        if let Some(org) = &self.org_id
            && org.trim().is_empty()
        {
            return Err(BatchError::InvalidRequest("orgId must not be blank".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Ok,
    Warning,
    Error,
}

impl ItemStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// Outcome of migrating one dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemResult {
    pub source_uid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_uid: Option<String>,
    pub status: ItemStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ItemResult {
    pub fn ok(source_uid: &str, target_uid: String) -> Self {
        Self {
            source_uid: source_uid.to_string(),
            target_uid: Some(target_uid),
            status: ItemStatus::Ok,
            message: None,
        }
    }

    pub fn warning(source_uid: &str, target_uid: String, message: String) -> Self {
        Self {
            source_uid: source_uid.to_string(),
            target_uid: Some(target_uid),
            status: ItemStatus::Warning,
            message: Some(message),
        }
    }

    pub fn error(source_uid: &str, message: String) -> Self {
        Self {
            source_uid: source_uid.to_string(),
            target_uid: None,
            status: ItemStatus::Error,
            message: Some(message),
        }
    }
}

/// Per-status counts over a batch's results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub ok: usize,
    pub warning: usize,
    pub error: usize,
}

impl BatchSummary {
    pub fn from_results(results: &[ItemResult]) -> Self {
        results.iter().fold(Self::default(), |mut acc, r| {
            match r.status {
                ItemStatus::Ok => acc.ok += 1,
                ItemStatus::Warning => acc.warning += 1,
                ItemStatus::Error => acc.error += 1,
            }
            acc
        })
    }

    pub fn total(&self) -> usize {
        self.ok + self.warning + self.error
    }
}
