//! Transport-level error handling tests.
//!
//! # Invariants
//! - Connection failures surface as `Transport`, never as `ApiError`
//! - An expired per-call timeout surfaces as `Timeout`
//! - Requests are never retried: one failing call hits the server exactly once

mod common;

use common::*;
use grafana_client::BasicAuth;
use secrecy::SecretString;
use std::time::Duration;
use wiremock::matchers::{method, path};

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let client = GrafanaClient::builder()
        .base_url("http://127.0.0.1:1".to_string())
        .credentials(BasicAuth::new("admin", SecretString::new("admin".into())))
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();

    let err = client.lookup_user("alice").await.unwrap_err();
    assert!(
        matches!(err, ClientError::Transport(_) | ClientError::Timeout(_)),
        "got {err:?}"
    );
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_timeout_is_reported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users/lookup"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"id": 1}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let client = GrafanaClient::builder()
        .base_url(mock_server.uri())
        .credentials(BasicAuth::new("admin", SecretString::new("admin".into())))
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();

    let err = client.lookup_user("alice").await.unwrap_err();
    assert!(matches!(err, ClientError::Timeout(_)), "got {err:?}");
}

#[tokio::test]
async fn test_server_error_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/dashboards/uid/abc123"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.get_dashboard_by_uid("abc123").await.unwrap_err();
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn test_org_scoped_client_sends_org_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/search"))
        .and(wiremock::matchers::header("X-Grafana-Org-Id", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server).with_org_id("5");
    assert!(client.search_dashboards("x").await.unwrap().is_empty());
}
