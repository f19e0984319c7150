//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Clients built here use basic auth `admin:admin` and org `1`

#[allow(unused_imports)]
pub use grafana_client::testing::load_fixture;

#[allow(unused_imports)]
pub use grafana_client::{ClientError, GrafanaClient};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use grafana_client::BasicAuth;
use secrecy::SecretString;
use std::time::Duration;

/// Build a client pointing at the mock server.
#[allow(dead_code)]
pub fn test_client(server: &MockServer) -> GrafanaClient {
    GrafanaClient::builder()
        .base_url(server.uri())
        .credentials(BasicAuth::new("admin", SecretString::new("admin".into())))
        .timeout(Duration::from_secs(5))
        .build()
        .expect("client should build")
}
