//! User API methods for [`GrafanaClient`].

use crate::client::GrafanaClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::UserLookup;

impl GrafanaClient {
    /// Look up a user by login or email.
    pub async fn lookup_user(&self, login_or_email: &str) -> Result<UserLookup> {
        endpoints::lookup_user(
            &self.http,
            &self.base_url,
            &self.auth,
            &self.org_id,
            login_or_email,
        )
        .await
    }
}
