//! Dashboard endpoint tests.
//!
//! # Invariants
//! - Every request carries basic auth and the organization header
//! - Import sends `overwrite: true` and omits `folderUid` when none is given
//! - An undecodable import body is not an error

mod common;

use common::*;
use grafana_client::models::ImportDashboardRequest;
use grafana_client::DashboardJson;
use serde_json::json;
use wiremock::matchers::{basic_auth, body_json, header, method, path};

#[tokio::test]
async fn test_get_dashboard_by_uid() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/dashboards/uid/abc123"))
        .and(basic_auth("admin", "admin"))
        .and(header("X-Grafana-Org-Id", "1"))
        .and(header("Accept", "application/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("dashboards/get_dashboard.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let resp = client.get_dashboard_by_uid("abc123").await.unwrap();

    assert_eq!(resp.meta.id, 42);
    assert_eq!(resp.meta.uid, "abc123");
    assert_eq!(resp.meta.folder_uid.as_deref(), Some("ops"));
    assert_eq!(resp.title(), Some("Sales"));
    assert_eq!(resp.numeric_id(), Some(42));
}

#[tokio::test]
async fn test_get_dashboard_encodes_uid() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/dashboards/uid/a%2Fb"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"dashboard": {}})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    assert!(client.get_dashboard_by_uid("a/b").await.is_ok());
}

#[tokio::test]
async fn test_get_dashboard_empty_uid_rejected_without_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.get_dashboard_by_uid("  ").await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidRequest(_)));
}

#[tokio::test]
async fn test_get_dashboard_not_found_keeps_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/dashboards/uid/missing"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"message": "Dashboard not found"})),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.get_dashboard_by_uid("missing").await.unwrap_err();

    assert!(err.is_not_found());
    match err {
        ClientError::ApiError { status, body, .. } => {
            assert_eq!(status, 404);
            assert!(body.contains("Dashboard not found"));
        }
        other => panic!("Expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_get_dashboard_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/dashboards/uid/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.get_dashboard_by_uid("abc123").await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn test_import_dashboard_payload() {
    let mock_server = MockServer::start().await;

    let mut dashboard = DashboardJson::new();
    dashboard.insert("id".to_string(), serde_json::Value::Null);
    dashboard.insert("uid".to_string(), json!("abc123"));
    dashboard.insert("title".to_string(), json!("Sales"));
    dashboard.insert("version".to_string(), json!(0));

    Mock::given(method("POST"))
        .and(path("/api/dashboards/db"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({
            "dashboard": {"id": null, "uid": "abc123", "title": "Sales", "version": 0},
            "folderUid": "ops",
            "overwrite": true,
            "message": "Imported by Dashboard Transporter"
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("dashboards/import_dashboard.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let request = ImportDashboardRequest {
        dashboard,
        folder_uid: Some("ops".to_string()),
        overwrite: true,
        message: Some("Imported by Dashboard Transporter".to_string()),
    };
    let resp = client.import_dashboard(&request).await.unwrap();

    assert_eq!(resp.uid(), Some("abc123"));
    assert_eq!(resp.numeric_id(), Some(101));
    assert_eq!(resp.status.as_deref(), Some("success"));
}

#[tokio::test]
async fn test_import_dashboard_unreadable_success_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/dashboards/db"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let request = ImportDashboardRequest {
        dashboard: DashboardJson::new(),
        folder_uid: None,
        overwrite: true,
        message: None,
    };
    let resp = client.import_dashboard(&request).await.unwrap();
    assert_eq!(resp, Default::default());
}

#[tokio::test]
async fn test_import_dashboard_conflict() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/dashboards/db"))
        .respond_with(ResponseTemplate::new(412).set_body_json(json!({
            "message": "A dashboard with the same name in the folder already exists",
            "status": "name-exists"
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let request = ImportDashboardRequest {
        dashboard: DashboardJson::new(),
        folder_uid: None,
        overwrite: true,
        message: None,
    };
    let err = client.import_dashboard(&request).await.unwrap_err();
    assert_eq!(err.status(), Some(412));
    assert!(err.to_string().starts_with("grafana api 412: "));
    assert!(err.to_string().contains("name-exists"));
}
