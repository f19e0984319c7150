//! User lookup models.

use serde::Deserialize;

/// Response of `GET /api/users/lookup?loginOrEmail=`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserLookup {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}
