//! User lookup endpoint.

use reqwest::Client;

use crate::auth::BasicAuth;
use crate::endpoints::request::{authorize, read_json};
use crate::endpoints::{API_PREFIX, send_request};
use crate::error::{ClientError, Result};
use crate::models::UserLookup;

/// Look up a user by login or email.
///
/// The value is sent exactly as given; Grafana decides case sensitivity.
pub async fn lookup_user(
    client: &Client,
    base_url: &str,
    auth: &BasicAuth,
    org_id: &str,
    login_or_email: &str,
) -> Result<UserLookup> {
    if login_or_email.is_empty() {
        return Err(ClientError::InvalidRequest(
            "loginOrEmail must not be empty".to_string(),
        ));
    }

    let endpoint = format!("{API_PREFIX}/users/lookup");
    let builder = authorize(client.get(format!("{base_url}{endpoint}")), auth, org_id)
        .query(&[("loginOrEmail", login_or_email)]);

    let response = send_request(builder, &endpoint, "GET").await?;
    read_json(response, "user lookup").await
}
