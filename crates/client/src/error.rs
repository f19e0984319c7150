//! Error types for the Grafana client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Grafana client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Network or connection failure before a response was received.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The per-call timeout expired.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// Non-success HTTP status from Grafana; `body` is the raw response text.
    #[error("grafana api {status}: {body}")]
    ApiError {
        status: u16,
        url: String,
        body: String,
    },

    /// Response body was malformed or had an unexpected shape.
    #[error("decode failed: {0}")]
    Decode(String),

    /// Response was well-formed but semantically empty.
    #[error("empty result: {0}")]
    EmptyResult(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Missing or unusable credentials.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// A request argument was rejected before sending.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err)
        }
    }
}

impl ClientError {
    /// HTTP status carried by an [`ClientError::ApiError`].
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this error is an HTTP 404 from Grafana.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
