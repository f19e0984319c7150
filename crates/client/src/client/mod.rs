//! Main Grafana API client and API methods.
//!
//! This module provides the primary [`GrafanaClient`] for one Grafana
//! instance. Each API method delegates to a free function in
//! [`crate::endpoints`].
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `dashboards`: Dashboard get/import methods
//! - `search`: Dashboard search
//! - `users`: User lookup
//! - `permissions`: Dashboard permission read/replace
//!
//! # Invariants
//! - Clients are cheap to clone; clones share the connection pool
//! - Every request is sent once; nothing is retried

pub mod builder;

mod dashboards;
mod permissions;
mod search;
mod users;

use std::time::Duration;

use crate::auth::BasicAuth;

/// Grafana HTTP API client bound to one instance and one organization.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use grafana_client::{BasicAuth, GrafanaClient};
/// use secrecy::SecretString;
///
/// let client = GrafanaClient::builder()
///     .base_url("https://grafana.example.com".to_string())
///     .credentials(BasicAuth::new("admin", SecretString::new("admin".into())))
///     .build()?;
/// ```
#[derive(Debug, Clone)]
pub struct GrafanaClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) auth: BasicAuth,
    pub(crate) org_id: String,
    pub(crate) timeout: Duration,
}

impl GrafanaClient {
    /// Create a new client builder.
    pub fn builder() -> builder::GrafanaClientBuilder {
        builder::GrafanaClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Organization the client is scoped to.
    pub fn org_id(&self) -> &str {
        &self.org_id
    }

    /// Per-call timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// A clone of this client scoped to another organization.
    pub fn with_org_id(&self, org_id: impl Into<String>) -> Self {
        Self {
            org_id: org_id.into(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use secrecy::SecretString;

    fn auth() -> BasicAuth {
        BasicAuth::new("admin", SecretString::new("admin".into()))
    }

    #[test]
    fn test_client_builder_with_credentials() {
        let client = GrafanaClient::builder()
            .base_url("https://grafana.example.com".to_string())
            .credentials(auth())
            .build()
            .unwrap();

        assert_eq!(client.base_url(), "https://grafana.example.com");
        assert_eq!(client.org_id(), "1");
        assert_eq!(client.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_client_builder_missing_base_url() {
        let client = GrafanaClient::builder().credentials(auth()).build();
        assert!(matches!(client.unwrap_err(), ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_client_builder_missing_credentials() {
        let client = GrafanaClient::builder()
            .base_url("https://grafana.example.com".to_string())
            .build();
        assert!(matches!(client.unwrap_err(), ClientError::AuthFailed(_)));
    }

    #[test]
    fn test_with_org_id_keeps_everything_else() {
        let client = GrafanaClient::builder()
            .base_url("https://grafana.example.com/".to_string())
            .credentials(auth())
            .org_id("3")
            .build()
            .unwrap();

        let scoped = client.with_org_id("9");
        assert_eq!(scoped.org_id(), "9");
        assert_eq!(scoped.base_url(), "https://grafana.example.com");
        assert_eq!(client.org_id(), "3");
    }
}
