//! In-memory identity provider.

use std::time::Duration;

use async_trait::async_trait;
use hauler_core::account::{IdentityProvider, UserAccount};
use hauler_core::error::Result;
use tokio::sync::watch;

/// Simulated provider round trip, so sign-in feels like a network call.
const SIGN_IN_DELAY: Duration = Duration::from_millis(500);

/// Identity provider backed by a single fixed account.
///
/// Always signs in the account it was built with after a short simulated
/// round trip; it never rejects. Used by workshop mode and tests.
pub struct InMemoryIdentityProvider {
    account: UserAccount,
    state: watch::Sender<Option<UserAccount>>,
    sign_in_delay: Duration,
}

impl InMemoryIdentityProvider {
    /// Starts already signed in, so subscribers resolve to the account
    /// immediately.
    pub fn seeded(account: UserAccount) -> Self {
        let (state, _) = watch::channel(Some(account.clone()));
        Self {
            account,
            state,
            sign_in_delay: SIGN_IN_DELAY,
        }
    }

    /// Starts signed out; `sign_in` installs the account.
    pub fn signed_out(account: UserAccount) -> Self {
        let (state, _) = watch::channel(None);
        Self {
            account,
            state,
            sign_in_delay: SIGN_IN_DELAY,
        }
    }

    /// Overrides the simulated round-trip delay. Tests pass zero.
    pub fn with_sign_in_delay(mut self, delay: Duration) -> Self {
        self.sign_in_delay = delay;
        self
    }
}

#[async_trait]
impl IdentityProvider for InMemoryIdentityProvider {
    async fn sign_in(&self) -> Result<UserAccount> {
        tracing::debug!(
            "[InMemoryIdentityProvider] simulating provider round trip ({:?})",
            self.sign_in_delay
        );
        tokio::time::sleep(self.sign_in_delay).await;
        self.state.send_replace(Some(self.account.clone()));
        tracing::info!("[InMemoryIdentityProvider] signed in {}", self.account.uid);
        Ok(self.account.clone())
    }

    async fn sign_out(&self) -> Result<()> {
        self.state.send_replace(None);
        tracing::info!("[InMemoryIdentityProvider] signed out");
        Ok(())
    }

    fn subscribe(&self) -> watch::Receiver<Option<UserAccount>> {
        self.state.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[tokio::test]
    async fn test_seeded_provider_is_resolved_at_subscription_time() {
        let provider = InMemoryIdentityProvider::seeded(seed::demo_account());
        let rx = provider.subscribe();
        assert_eq!(
            rx.borrow().as_ref().map(|a| a.uid.clone()),
            Some("mock-user-123".to_string())
        );
    }

    #[tokio::test]
    async fn test_sign_in_publishes_to_subscribers() {
        let provider = InMemoryIdentityProvider::signed_out(seed::demo_account())
            .with_sign_in_delay(Duration::ZERO);
        let mut rx = provider.subscribe();
        assert!(rx.borrow().is_none());

        provider.sign_in().await.unwrap();
        rx.changed().await.unwrap();
        assert!(rx.borrow().is_some());
    }

    #[tokio::test]
    async fn test_sign_out_clears_the_published_account() {
        let provider = InMemoryIdentityProvider::seeded(seed::demo_account());
        provider.sign_out().await.unwrap();
        assert!(provider.subscribe().borrow().is_none());

        // Idempotent
        provider.sign_out().await.unwrap();
        assert!(provider.subscribe().borrow().is_none());
    }
}
