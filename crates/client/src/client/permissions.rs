//! Dashboard permission API methods for [`GrafanaClient`].

use crate::client::GrafanaClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{DashboardPermission, PermissionItem};

impl GrafanaClient {
    /// Read the current permission list of a dashboard.
    pub async fn get_dashboard_permissions(
        &self,
        dashboard_id: i64,
    ) -> Result<Vec<DashboardPermission>> {
        endpoints::get_dashboard_permissions(
            &self.http,
            &self.base_url,
            &self.auth,
            &self.org_id,
            dashboard_id,
        )
        .await
    }

    /// Replace the permission list of a dashboard with `items`.
    pub async fn update_dashboard_permissions(
        &self,
        dashboard_id: i64,
        items: Vec<PermissionItem>,
    ) -> Result<()> {
        endpoints::update_dashboard_permissions(
            &self.http,
            &self.base_url,
            &self.auth,
            &self.org_id,
            dashboard_id,
            items,
        )
        .await
    }
}
