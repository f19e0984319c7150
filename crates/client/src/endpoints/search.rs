//! Search endpoint.

use reqwest::Client;

use crate::auth::BasicAuth;
use crate::endpoints::request::{authorize, read_json};
use crate::endpoints::{API_PREFIX, send_request};
use crate::error::Result;
use crate::models::SearchHit;

/// Search type selecting dashboards only.
const DASHBOARD_SEARCH_TYPE: &str = "dash-db";

/// Full-text search over dashboards.
///
/// Grafana's search matches on title; it does not match on uid.
pub async fn search_dashboards(
    client: &Client,
    base_url: &str,
    auth: &BasicAuth,
    org_id: &str,
    query: &str,
) -> Result<Vec<SearchHit>> {
    let endpoint = format!("{API_PREFIX}/search");
    let builder = authorize(client.get(format!("{base_url}{endpoint}")), auth, org_id)
        .query(&[("type", DASHBOARD_SEARCH_TYPE), ("query", query)]);

    let response = send_request(builder, &endpoint, "GET").await?;
    read_json(response, "search results").await
}
