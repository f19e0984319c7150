//! Search models.

use serde::{Deserialize, Serialize};

/// One entry of `GET /api/search`.
///
/// Serializes as `{id, uid, title}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type", default, skip_serializing)]
    pub kind: Option<String>,
}

impl SearchHit {
    /// Whether the hit is a dashboard. Hits without a type count as one.
    pub fn is_dashboard(&self) -> bool {
        self.kind.as_deref().is_none_or(|kind| kind == "dash-db")
    }
}
