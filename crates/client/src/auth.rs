//! Basic authentication credentials.

use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};
use transporter_config::Credentials;

/// Username/password pair sent as HTTP basic auth on every request.
#[derive(Debug, Clone)]
pub struct BasicAuth {
    username: String,
    password: SecretString,
}

impl BasicAuth {
    pub fn new(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Attach the `Authorization: Basic ...` header to a request.
    pub(crate) fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.basic_auth(&self.username, Some(self.password.expose_secret()))
    }
}

impl From<Credentials> for BasicAuth {
    fn from(credentials: Credentials) -> Self {
        Self::new(credentials.username, credentials.password)
    }
}
