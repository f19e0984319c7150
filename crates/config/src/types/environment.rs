//! Environment registry entries.
//!
//! Responsibilities:
//! - Describe one connectable platform instance (id, display name, base URL).
//! - Hold its basic-auth credential pair without exposing it.
//!
//! Invariants:
//! - `id` is the lowercased tier suffix and is unique within a [`super::Config`].
//! - `url` has no trailing slash.
//! - Credentials are optional at load time; [`Environment::credentials`] enforces them.

use secrecy::SecretString;
use serde::Serialize;

use crate::loader::ConfigError;

/// Basic-auth credential pair for one instance.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::new(password.into().into()),
        }
    }
}

/// One independently addressable deployment of the dashboard platform.
#[derive(Debug, Clone, Serialize)]
pub struct Environment {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(skip)]
    pub username: Option<String>,
    #[serde(skip)]
    pub password: Option<SecretString>,
}

impl Environment {
    pub fn new(id: impl Into<String>, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url: url.into(),
            username: None,
            password: None,
        }
    }

    /// Attach a credential pair.
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.username = Some(credentials.username);
        self.password = Some(credentials.password);
        self
    }

    /// Return the credential pair, failing if either half is missing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredentials`] naming the absent field.
    pub fn credentials(&self) -> Result<Credentials, ConfigError> {
        let username = self
            .username
            .clone()
            .ok_or_else(|| ConfigError::MissingCredentials {
                env: self.id.clone(),
                field: "USER",
            })?;
        let password = self
            .password
            .clone()
            .ok_or_else(|| ConfigError::MissingCredentials {
                env: self.id.clone(),
                field: "PASSWORD",
            })?;
        Ok(Credentials { username, password })
    }
}
