//! Dashboard permission (access-control list) models.
//!
//! Grafana's permission write endpoint replaces the whole list, so entries
//! read back must be re-emitted faithfully; [`DashboardPermission::to_item`]
//! is the single conversion from the read shape to the write shape.

use serde::{Deserialize, Deserializer, Serialize, de};
use std::fmt;
use std::str::FromStr;

/// Grafana permission level. Ordered: view < edit < admin.
///
/// Serialized as the bare number. Deserializes from a number or from any
/// name accepted by [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PermissionLevel(pub u8);

impl PermissionLevel {
    pub const VIEW: Self = Self(1);
    pub const EDIT: Self = Self(2);
    pub const ADMIN: Self = Self(4);

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for PermissionLevel {
    fn default() -> Self {
        Self::EDIT
    }
}

impl fmt::Display for PermissionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::VIEW => f.write_str("view"),
            Self::EDIT => f.write_str("edit"),
            Self::ADMIN => f.write_str("admin"),
            Self(other) => write!(f, "{other}"),
        }
    }
}

impl FromStr for PermissionLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "view" | "viewer" => Ok(Self::VIEW),
            "edit" | "editor" => Ok(Self::EDIT),
            "admin" => Ok(Self::ADMIN),
            other => match other.parse::<u8>() {
                Ok(n) if n > 0 => Ok(Self(n)),
                _ => Err(format!(
                    "invalid permission level '{s}' (expected view, edit, admin or a positive number)"
                )),
            },
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLevel {
    Number(u8),
    Name(String),
}

impl<'de> Deserialize<'de> for PermissionLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawLevel::deserialize(deserializer)? {
            RawLevel::Number(n) => Ok(Self(n)),
            RawLevel::Name(name) => name.parse().map_err(de::Error::custom),
        }
    }
}

/// The holder of a grant: exactly one of user, team or role.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grantee {
    #[serde(rename = "userId")]
    User(i64),
    #[serde(rename = "teamId")]
    Team(i64),
    #[serde(rename = "role")]
    Role(String),
}

/// One entry of the permission write payload: `{userId|teamId|role, permission}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionItem {
    #[serde(flatten)]
    pub grantee: Grantee,
    pub permission: PermissionLevel,
}

/// Body of `POST /api/dashboards/id/{id}/permissions`.
#[derive(Debug, Clone, Serialize)]
pub struct UpdatePermissionsRequest {
    pub items: Vec<PermissionItem>,
}

/// One entry as returned by `GET /api/dashboards/id/{id}/permissions`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardPermission {
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub user_login: Option<String>,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub team_id: i64,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub permission: u8,
    #[serde(default)]
    pub inherited: bool,
}

impl DashboardPermission {
    /// The grantee of this entry. User wins over team, team over role.
    pub fn grantee(&self) -> Option<Grantee> {
        if self.user_id > 0 {
            Some(Grantee::User(self.user_id))
        } else if self.team_id > 0 {
            Some(Grantee::Team(self.team_id))
        } else {
            self.role
                .as_deref()
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .map(|r| Grantee::Role(r.to_string()))
        }
    }

    /// Convert to the write shape; `None` for entries with no grantee or no level.
    pub fn to_item(&self) -> Option<PermissionItem> {
        if self.permission == 0 {
            return None;
        }
        self.grantee().map(|grantee| PermissionItem {
            grantee,
            permission: PermissionLevel(self.permission),
        })
    }
}

/// Permission list response. Grafana versions return either a bare array or
/// an object wrapping it.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DashboardPermissionList {
    Bare(Vec<DashboardPermission>),
    Wrapped {
        #[serde(default, rename = "dashboardId")]
        dashboard_id: i64,
        #[serde(default)]
        permissions: Vec<DashboardPermission>,
    },
}

impl DashboardPermissionList {
    pub fn into_permissions(self) -> Vec<DashboardPermission> {
        match self {
            Self::Bare(permissions) => permissions,
            Self::Wrapped { permissions, .. } => permissions,
        }
    }
}
