//! Remote identity provider.

use std::sync::Arc;

use async_trait::async_trait;
use hauler_core::account::{IdentityProvider, UserAccount};
use hauler_core::error::{HaulerError, Result};
use tokio::sync::watch;

use super::client::BackendClient;

/// Identity provider talking to the backend's auth endpoints.
///
/// The provider-side state channel reflects transitions made through this
/// instance; server-initiated revocation is not pushed and would only be
/// noticed on the next failing call.
pub struct HttpIdentityProvider {
    client: Arc<BackendClient>,
    state: watch::Sender<Option<UserAccount>>,
}

impl HttpIdentityProvider {
    /// Starts signed out.
    pub fn new(client: Arc<BackendClient>) -> Self {
        let (state, _) = watch::channel(None);
        Self { client, state }
    }
}

/// Failures on auth endpoints are provider rejections, not storage faults.
fn as_auth(err: HaulerError) -> HaulerError {
    match err {
        HaulerError::Persistence(message) => HaulerError::Auth(message),
        other => other,
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    async fn sign_in(&self) -> Result<UserAccount> {
        let account: UserAccount = self
            .client
            .post_json_response("/v1/auth/sign-in", &serde_json::json!({}))
            .await
            .map_err(as_auth)?;
        tracing::info!("[HttpIdentityProvider] signed in {}", account.uid);
        self.state.send_replace(Some(account.clone()));
        Ok(account)
    }

    async fn sign_out(&self) -> Result<()> {
        self.client
            .post_json("/v1/auth/sign-out", &serde_json::json!({}))
            .await
            .map_err(as_auth)?;
        tracing::info!("[HttpIdentityProvider] signed out");
        self.state.send_replace(None);
        Ok(())
    }

    fn subscribe(&self) -> watch::Receiver<Option<UserAccount>> {
        self.state.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_endpoint_failures_surface_as_auth_errors() {
        let err = as_auth(HaulerError::persistence("backend error (401): nope"));
        assert!(err.is_auth());

        let passthrough = as_auth(HaulerError::media("unrelated"));
        assert!(passthrough.is_media());
    }
}
