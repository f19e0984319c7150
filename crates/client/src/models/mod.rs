//! Data models for Grafana API requests and responses.
//!
//! Types are organized by resource in submodules and re-exported here
//! for convenient access.

pub mod dashboards;
pub mod permissions;
pub mod search;
pub mod users;

pub use dashboards::{
    DashboardGetResponse, DashboardJson, DashboardMeta, ImportDashboardRequest,
    ImportDashboardResponse,
};
pub use permissions::{
    DashboardPermission, Grantee, PermissionItem, PermissionLevel, UpdatePermissionsRequest,
};
pub use search::SearchHit;
pub use users::UserLookup;
