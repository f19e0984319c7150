//! Dashboard models.
//!
//! The dashboard body itself is schema-less; it is carried as an ordered JSON
//! object so unknown keys survive a get/import round trip untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A dashboard definition as returned by and sent to Grafana.
pub type DashboardJson = Map<String, Value>;

/// Metadata block of `GET /api/dashboards/uid/{uid}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMeta {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub folder_uid: Option<String>,
    #[serde(default)]
    pub folder_title: Option<String>,
}

/// Response of `GET /api/dashboards/uid/{uid}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardGetResponse {
    #[serde(default)]
    pub meta: DashboardMeta,
    #[serde(default)]
    pub dashboard: Option<DashboardJson>,
}

impl DashboardGetResponse {
    /// Title of the dashboard, if it has a string title.
    pub fn title(&self) -> Option<&str> {
        self.dashboard
            .as_ref()
            .and_then(|d| d.get("title"))
            .and_then(Value::as_str)
    }

    /// Positive instance-local id, from `meta.id` or else `dashboard.id`.
    pub fn numeric_id(&self) -> Option<i64> {
        if self.meta.id > 0 {
            return Some(self.meta.id);
        }
        self.dashboard
            .as_ref()
            .and_then(|d| d.get("id"))
            .and_then(Value::as_i64)
            .filter(|id| *id > 0)
    }
}

/// Body of `POST /api/dashboards/db`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportDashboardRequest {
    pub dashboard: DashboardJson,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_uid: Option<String>,
    pub overwrite: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Response of `POST /api/dashboards/db`.
///
/// Every field is optional: older and newer Grafana versions differ in what
/// they return, and `id` in particular is not guaranteed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ImportDashboardResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub version: Option<i64>,
}

impl ImportDashboardResponse {
    /// Non-empty uid returned by the import.
    pub fn uid(&self) -> Option<&str> {
        self.uid.as_deref().filter(|u| !u.is_empty())
    }

    /// Positive numeric id returned by the import.
    pub fn numeric_id(&self) -> Option<i64> {
        self.id.filter(|id| *id > 0)
    }
}
