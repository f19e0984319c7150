//! Grafana HTTP API endpoint implementations.
//!
//! Each endpoint is a free async function taking the shared `reqwest`
//! client, the instance base URL, credentials and organization id. The
//! [`crate::GrafanaClient`] methods are thin wrappers over these.

mod dashboards;
mod permissions;
mod request;
mod search;
pub mod url_encoding;
mod users;

pub use dashboards::{get_dashboard_by_uid, import_dashboard};
pub use permissions::{get_dashboard_permissions, update_dashboard_permissions};
pub use request::{ORG_ID_HEADER, send_request};
pub use search::search_dashboards;
pub use url_encoding::encode_path_segment;
pub use users::lookup_user;

/// Path prefix of every Grafana HTTP API route.
pub const API_PREFIX: &str = "/api";
