//! Dashboard permission endpoints.
//!
//! The write endpoint has replace semantics: the posted list becomes the
//! complete access-control list of the dashboard.

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;

use crate::auth::BasicAuth;
use crate::endpoints::request::{authorize, read_json};
use crate::endpoints::{API_PREFIX, send_request};
use crate::error::Result;
use crate::models::permissions::DashboardPermissionList;
use crate::models::{DashboardPermission, PermissionItem, UpdatePermissionsRequest};

/// Read the current permission list of a dashboard.
pub async fn get_dashboard_permissions(
    client: &Client,
    base_url: &str,
    auth: &BasicAuth,
    org_id: &str,
    dashboard_id: i64,
) -> Result<Vec<DashboardPermission>> {
    let endpoint = format!("{API_PREFIX}/dashboards/id/{dashboard_id}/permissions");
    let builder = authorize(client.get(format!("{base_url}{endpoint}")), auth, org_id);

    let response = send_request(builder, &endpoint, "GET").await?;
    let list: DashboardPermissionList = read_json(response, "dashboard permissions").await?;
    Ok(list.into_permissions())
}

/// Replace the permission list of a dashboard.
pub async fn update_dashboard_permissions(
    client: &Client,
    base_url: &str,
    auth: &BasicAuth,
    org_id: &str,
    dashboard_id: i64,
    items: Vec<PermissionItem>,
) -> Result<()> {
    let endpoint = format!("{API_PREFIX}/dashboards/id/{dashboard_id}/permissions");
    let builder = authorize(client.post(format!("{base_url}{endpoint}")), auth, org_id)
        .header(CONTENT_TYPE, "application/json")
        .json(&UpdatePermissionsRequest { items });

    send_request(builder, &endpoint, "POST").await?;
    Ok(())
}
