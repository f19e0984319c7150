//! Grafana HTTP API client.
//!
//! This crate provides a type-safe async client for the subset of the
//! Grafana HTTP API needed to move dashboards between instances: dashboard
//! get/import, search, user lookup and dashboard permissions. Every request
//! uses basic authentication and is scoped to one organization.

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use auth::BasicAuth;
pub use client::GrafanaClient;
pub use client::builder::GrafanaClientBuilder;
pub use error::{ClientError, Result};
pub use models::{
    DashboardGetResponse, DashboardJson, DashboardMeta, DashboardPermission, Grantee,
    ImportDashboardRequest, ImportDashboardResponse, PermissionItem, PermissionLevel, SearchHit,
    UserLookup,
};
