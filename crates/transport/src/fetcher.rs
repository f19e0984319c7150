//! Source-side dashboard retrieval.

use grafana_client::{ClientError, DashboardJson, GrafanaClient, Result};

/// A dashboard definition as read from the source instance.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceDashboard {
    pub definition: DashboardJson,
    /// Empty when the definition has no string `title`.
    pub title: String,
}

/// Fetch the full definition of `uid` from `client`.
///
/// A response whose `dashboard` is null or missing is an
/// [`ClientError::EmptyResult`], never an empty definition.
pub async fn fetch(client: &GrafanaClient, uid: &str) -> Result<SourceDashboard> {
    let response = client.get_dashboard_by_uid(uid).await?;
    let title = response.title().unwrap_or_default().to_string();

    let Some(definition) = response.dashboard else {
        return Err(ClientError::EmptyResult(format!(
            "dashboard '{uid}' returned no definition"
        )));
    };

    tracing::debug!(uid, title = %title, "fetched source dashboard");
    Ok(SourceDashboard { definition, title })
}
