//! Shared helpers for pipeline integration tests.
//!
//! Every test stands up its own `MockServer` per Grafana instance; clients
//! built here authenticate as `admin:admin` against org `1`.

#![allow(dead_code)]

use dashboard_transport::ClientRegistry;
use grafana_client::{BasicAuth, GrafanaClient};
use secrecy::SecretString;
use serde_json::{Value, json};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn test_client(server: &MockServer) -> GrafanaClient {
    GrafanaClient::builder()
        .base_url(server.uri())
        .credentials(BasicAuth::new("admin", SecretString::new("admin".into())))
        .timeout(Duration::from_secs(5))
        .build()
        .expect("client should build")
}

/// Registry with `dev` pointing at `source` and `prd` at `target`.
pub fn registry(source: &MockServer, target: &MockServer) -> ClientRegistry {
    ClientRegistry::new()
        .with_client("dev", test_client(source))
        .with_client("prd", test_client(target))
}

/// Body of a `GET /api/dashboards/uid/{uid}` answer.
pub fn dashboard_body(uid: &str, title: &str, meta_id: i64) -> Value {
    json!({
        "meta": {"id": meta_id, "uid": uid, "folderUid": "src-folder", "folderTitle": "Source"},
        "dashboard": {
            "id": meta_id,
            "uid": uid,
            "title": title,
            "version": 12,
            "panels": []
        }
    })
}

pub async fn mount_source_dashboard(server: &MockServer, uid: &str, title: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/api/dashboards/uid/{uid}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(dashboard_body(uid, title, 7)))
        .mount(server)
        .await;
}
