//! Session context.
//!
//! This module provides the `AuthContext` which owns the signed-in account,
//! its service profile, and the loading flag, and exposes them as one
//! observable state value. All identity and profile access goes through the
//! injected ports, so the context works identically against the in-memory
//! and remote backends.

use std::sync::Arc;

use hauler_core::account::{IdentityProvider, UserAccount};
use hauler_core::error::Result;
use hauler_core::profile::{Profile, ProfileRepository};
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Observable session state.
///
/// `loading` is true from construction until the first identity-provider
/// resolution completes, and false forever after. Whenever `account` is
/// `None`, `profile` is `None` as well.
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub account: Option<UserAccount>,
    pub profile: Option<Profile>,
    pub loading: bool,
}

impl AuthState {
    fn resolving() -> Self {
        Self {
            account: None,
            profile: None,
            loading: true,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.account.is_some()
    }

    pub fn has_profile(&self) -> bool {
        self.profile.is_some()
    }
}

/// Holds the session and keeps it in sync with the identity provider.
///
/// # Lifecycle
///
/// [`AuthContext::start`] spawns a watcher task that performs the first
/// state resolution and then forwards provider-side transitions into the
/// published state. The task holds the context alive; call
/// [`AuthContext::shutdown`] when tearing the application down.
///
/// # Thread Safety
///
/// State lives in a `watch` channel; any number of tasks can hold
/// receivers, and all operations take `&self`.
pub struct AuthContext {
    identity: Arc<dyn IdentityProvider>,
    profiles: Arc<dyn ProfileRepository>,
    state: watch::Sender<AuthState>,
    watcher: std::sync::Mutex<Option<JoinHandle<()>>>,
}

impl AuthContext {
    /// Creates the context and starts its provider watcher.
    ///
    /// Returns immediately with `loading` still true; await
    /// [`AuthContext::ready`] to order first render after first resolution.
    pub fn start(
        identity: Arc<dyn IdentityProvider>,
        profiles: Arc<dyn ProfileRepository>,
    ) -> Arc<Self> {
        let (state, _) = watch::channel(AuthState::resolving());
        let context = Arc::new(Self {
            identity,
            profiles,
            state,
            watcher: std::sync::Mutex::new(None),
        });

        let ctx = Arc::clone(&context);
        let handle = tokio::spawn(async move {
            let mut provider_state = ctx.identity.subscribe();
            let initial = provider_state.borrow_and_update().clone();
            ctx.apply_account(initial).await;

            loop {
                if provider_state.changed().await.is_err() {
                    tracing::debug!("[AuthContext] identity provider gone, watcher stopping");
                    break;
                }
                let next = provider_state.borrow_and_update().clone();
                let current_uid = ctx.state.borrow().account.as_ref().map(|a| a.uid.clone());
                if next.as_ref().map(|a| a.uid.clone()) == current_uid {
                    // sign_in/sign_out already applied this transition
                    continue;
                }
                ctx.apply_account(next).await;
            }
        });
        *context.watcher.lock().unwrap() = Some(handle);

        context
    }

    /// Resolves once the first identity-provider resolution has landed.
    pub async fn ready(&self) {
        let mut rx = self.state.subscribe();
        loop {
            if !rx.borrow_and_update().loading {
                return;
            }
            if rx.changed().await.is_err() {
                return;
            }
        }
    }

    /// Signs in through the identity provider and installs the session.
    ///
    /// The account's profile is loaded as part of installation; a profile
    /// lookup failure degrades to "no profile" and never fails the sign-in.
    pub async fn sign_in(&self) -> Result<UserAccount> {
        tracing::info!("[AuthContext] sign-in requested");
        let account = self.identity.sign_in().await?;
        self.apply_account(Some(account.clone())).await;
        Ok(account)
    }

    /// Signs out and clears the session, profile included.
    pub async fn sign_out(&self) -> Result<()> {
        tracing::info!("[AuthContext] sign-out requested");
        self.identity.sign_out().await?;
        self.apply_account(None).await;
        Ok(())
    }

    /// Re-reads the signed-in account's profile and installs it.
    ///
    /// No-op when signed out. Lookup failures are logged and swallowed;
    /// refreshing must never tear the session down.
    pub async fn refresh_profile(&self) {
        let Some(account) = self.state.borrow().account.clone() else {
            tracing::debug!("[AuthContext] refresh_profile skipped, signed out");
            return;
        };
        match self.profiles.find_by_uid(&account.uid).await {
            Ok(profile) => {
                self.state.send_modify(|state| {
                    // A concurrent sign-out wins; never attach a profile to
                    // an empty session
                    if state.account.is_some() {
                        state.profile = profile;
                    }
                });
            }
            Err(e) => tracing::warn!("[AuthContext] profile refresh failed: {}", e),
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    /// Subscribes to state changes.
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    /// Stops the provider watcher task.
    pub fn shutdown(&self) {
        if let Some(handle) = self.watcher.lock().unwrap().take() {
            handle.abort();
        }
    }

    async fn apply_account(&self, account: Option<UserAccount>) {
        match account {
            Some(account) => {
                let profile = match self.profiles.find_by_uid(&account.uid).await {
                    Ok(profile) => profile,
                    Err(e) => {
                        tracing::warn!(
                            "[AuthContext] profile lookup for {} failed: {}",
                            account.uid,
                            e
                        );
                        None
                    }
                };
                tracing::info!(
                    "[AuthContext] session resolved for {} (profile: {})",
                    account.uid,
                    profile.is_some()
                );
                self.state.send_replace(AuthState {
                    account: Some(account),
                    profile,
                    loading: false,
                });
            }
            None => {
                tracing::info!("[AuthContext] session cleared");
                self.state.send_replace(AuthState {
                    account: None,
                    profile: None,
                    loading: false,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use hauler_core::error::HaulerError;
    use hauler_infrastructure::{
        InMemoryIdentityProvider, InMemoryProfileRepository, seed,
    };
    use std::time::Duration;

    fn quick_identity(signed_in: bool) -> Arc<InMemoryIdentityProvider> {
        let provider = if signed_in {
            InMemoryIdentityProvider::seeded(seed::demo_account())
        } else {
            InMemoryIdentityProvider::signed_out(seed::demo_account())
        };
        Arc::new(provider.with_sign_in_delay(Duration::ZERO))
    }

    struct FailingProfiles;

    #[async_trait]
    impl ProfileRepository for FailingProfiles {
        async fn find_by_uid(&self, _uid: &str) -> Result<Option<Profile>> {
            Err(HaulerError::persistence("store offline"))
        }

        async fn save(&self, _profile: &Profile) -> Result<()> {
            Err(HaulerError::persistence("store offline"))
        }
    }

    #[tokio::test]
    async fn test_starts_loading_then_resolves_signed_out() {
        let auth = AuthContext::start(
            quick_identity(false),
            Arc::new(InMemoryProfileRepository::new()),
        );
        assert!(auth.state().loading);

        auth.ready().await;
        let state = auth.state();
        assert!(!state.loading);
        assert!(!state.is_authenticated());
        assert!(!state.has_profile());
        auth.shutdown();
    }

    #[tokio::test]
    async fn test_seeded_session_resolves_with_profile() {
        let auth = AuthContext::start(
            quick_identity(true),
            Arc::new(InMemoryProfileRepository::with_seed(seed::demo_profile())),
        );
        auth.ready().await;

        let state = auth.state();
        assert!(state.is_authenticated());
        assert!(state.has_profile());
        auth.shutdown();
    }

    #[tokio::test]
    async fn test_sign_in_loads_the_profile() {
        let auth = AuthContext::start(
            quick_identity(false),
            Arc::new(InMemoryProfileRepository::with_seed(seed::demo_profile())),
        );
        auth.ready().await;

        let account = auth.sign_in().await.unwrap();
        assert_eq!(account.uid, "mock-user-123");
        assert!(auth.state().has_profile());
        auth.shutdown();
    }

    #[tokio::test]
    async fn test_sign_out_clears_account_and_profile() {
        let auth = AuthContext::start(
            quick_identity(true),
            Arc::new(InMemoryProfileRepository::with_seed(seed::demo_profile())),
        );
        auth.ready().await;
        assert!(auth.state().has_profile());

        auth.sign_out().await.unwrap();
        let state = auth.state();
        assert!(!state.is_authenticated());
        assert!(!state.has_profile());
        auth.shutdown();
    }

    #[tokio::test]
    async fn test_profile_lookup_failure_degrades_to_no_profile() {
        let auth = AuthContext::start(quick_identity(false), Arc::new(FailingProfiles));
        auth.ready().await;

        auth.sign_in().await.unwrap();
        let state = auth.state();
        assert!(state.is_authenticated());
        assert!(!state.has_profile());
        auth.shutdown();
    }

    #[tokio::test]
    async fn test_refresh_profile_installs_a_newly_created_profile() {
        let profiles = Arc::new(InMemoryProfileRepository::new());
        let auth = AuthContext::start(quick_identity(true), profiles.clone());
        auth.ready().await;
        assert!(!auth.state().has_profile());

        profiles.save(&seed::demo_profile()).await.unwrap();
        auth.refresh_profile().await;
        assert!(auth.state().has_profile());
        auth.shutdown();
    }

    #[tokio::test]
    async fn test_refresh_profile_is_a_noop_when_signed_out() {
        let auth = AuthContext::start(
            quick_identity(false),
            Arc::new(InMemoryProfileRepository::with_seed(seed::demo_profile())),
        );
        auth.ready().await;

        auth.refresh_profile().await;
        assert!(!auth.state().has_profile());
        auth.shutdown();
    }

    #[tokio::test]
    async fn test_watcher_follows_provider_side_transitions() {
        let identity = quick_identity(true);
        let auth = AuthContext::start(
            identity.clone(),
            Arc::new(InMemoryProfileRepository::with_seed(seed::demo_profile())),
        );
        auth.ready().await;
        assert!(auth.state().is_authenticated());

        // Provider-side sign-out, not routed through the context
        let mut rx = auth.subscribe();
        identity.sign_out().await.unwrap();
        rx.changed().await.unwrap();

        let state = rx.borrow().clone();
        assert!(!state.is_authenticated());
        assert!(!state.has_profile());
        auth.shutdown();
    }
}
