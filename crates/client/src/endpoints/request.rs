//! Request helpers shared by every endpoint.
//!
//! Requests are sent exactly once: there is no retry or backoff. A non-2xx
//! status becomes [`ClientError::ApiError`] carrying the raw body so the
//! caller can surface Grafana's own diagnostics.

use reqwest::header::ACCEPT;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::auth::BasicAuth;
use crate::error::{ClientError, Result};

/// Header selecting the Grafana organization a request is scoped to.
pub const ORG_ID_HEADER: &str = "X-Grafana-Org-Id";

/// Attach basic auth, `Accept` and organization headers.
pub(crate) fn authorize(builder: RequestBuilder, auth: &BasicAuth, org_id: &str) -> RequestBuilder {
    auth.apply(builder)
        .header(ACCEPT, "application/json")
        .header(ORG_ID_HEADER, org_id)
}

/// Send a request once and map non-success statuses to [`ClientError::ApiError`].
///
/// # Errors
///
/// - [`ClientError::Timeout`] if the per-call timeout expires
/// - [`ClientError::Transport`] on connection failures
/// - [`ClientError::ApiError`] on any non-2xx status
pub async fn send_request(builder: RequestBuilder, endpoint: &str, method: &str) -> Result<Response> {
    debug!(method, endpoint, "Sending Grafana API request");

    let response = builder.send().await.map_err(ClientError::from)?;
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    debug!(
        method,
        endpoint,
        status = status.as_u16(),
        "Grafana API returned non-success status"
    );

    Err(ClientError::ApiError {
        status: status.as_u16(),
        url,
        body,
    })
}

/// Read the full body and decode it as JSON.
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response, what: &str) -> Result<T> {
    let bytes = response.bytes().await.map_err(ClientError::from)?;
    serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(format!("{what}: {e}")))
}
