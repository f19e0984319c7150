//! Import sanitization.
//!
//! A definition fetched from one instance carries that instance's numeric
//! id, version counter and folder linkage. Sent unchanged, the id could
//! overwrite an unrelated object on the target and the version would be
//! rejected as a conflict.

use grafana_client::DashboardJson;
use serde_json::Value;

/// Keys that only make sense on the originating instance.
const INSTANCE_LOCAL_KEYS: &[&str] = &["meta", "folderId", "folderUid", "folderTitle"];

/// Prepare a definition for import: `id` becomes null, `version` becomes 0
/// and instance-local keys are removed. `uid` is never touched.
pub fn sanitize(mut dashboard: DashboardJson) -> DashboardJson {
    dashboard.insert("id".to_string(), Value::Null);
    dashboard.insert("version".to_string(), Value::from(0));
    for key in INSTANCE_LOCAL_KEYS {
        dashboard.shift_remove(*key);
    }
    dashboard
}
