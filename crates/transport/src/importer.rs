//! Target-side dashboard import.

use grafana_client::{DashboardJson, GrafanaClient, ImportDashboardRequest, Result};

/// Change message recorded in the target's dashboard history.
pub const IMPORT_MESSAGE: &str = "Imported by Dashboard Transporter";

/// What the target reported about an accepted import.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportOutcome {
    /// Uid echoed by the target, if any.
    pub uid: Option<String>,
    /// Positive numeric id echoed by the target, if any.
    pub id: Option<i64>,
    pub status: Option<String>,
}

/// Import a sanitized definition into the target, overwriting any dashboard
/// with the same uid. `folder_uid` is sent only when non-blank; otherwise
/// the target's default folder applies.
pub async fn import(
    client: &GrafanaClient,
    definition: DashboardJson,
    folder_uid: &str,
) -> Result<ImportOutcome> {
    let folder_uid = folder_uid.trim();
    let request = ImportDashboardRequest {
        dashboard: definition,
        folder_uid: (!folder_uid.is_empty()).then(|| folder_uid.to_string()),
        overwrite: true,
        message: Some(IMPORT_MESSAGE.to_string()),
    };

    let response = client.import_dashboard(&request).await?;
    let outcome = ImportOutcome {
        uid: response.uid().map(str::to_string),
        id: response.numeric_id(),
        status: response.status.clone(),
    };

    tracing::debug!(uid = ?outcome.uid, id = ?outcome.id, "dashboard imported");
    Ok(outcome)
}
