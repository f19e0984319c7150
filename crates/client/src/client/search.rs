//! Search API methods for [`GrafanaClient`].

use crate::client::GrafanaClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::SearchHit;

impl GrafanaClient {
    /// Search dashboards by title text.
    pub async fn search_dashboards(&self, query: &str) -> Result<Vec<SearchHit>> {
        endpoints::search_dashboards(&self.http, &self.base_url, &self.auth, &self.org_id, query)
            .await
    }
}
