//! Dashboard API methods for [`GrafanaClient`].

use crate::client::GrafanaClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{DashboardGetResponse, ImportDashboardRequest, ImportDashboardResponse};

impl GrafanaClient {
    /// Get a dashboard and its metadata by uid.
    pub async fn get_dashboard_by_uid(&self, uid: &str) -> Result<DashboardGetResponse> {
        endpoints::get_dashboard_by_uid(&self.http, &self.base_url, &self.auth, &self.org_id, uid)
            .await
    }

    /// Create or overwrite a dashboard.
    pub async fn import_dashboard(
        &self,
        request: &ImportDashboardRequest,
    ) -> Result<ImportDashboardResponse> {
        endpoints::import_dashboard(&self.http, &self.base_url, &self.auth, &self.org_id, request)
            .await
    }
}
