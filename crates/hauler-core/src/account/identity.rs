//! Identity provider port.
//!
//! Defines the interface for authentication backends.

use async_trait::async_trait;
use tokio::sync::watch;

use super::model::UserAccount;
use crate::error::Result;

/// An abstract identity provider.
///
/// This trait defines the contract for signing in and out and for observing
/// the provider-side account state, decoupling session handling from the
/// specific backend (an in-memory simulator, a remote HTTP service).
///
/// # Implementation Notes
///
/// The subscription is a `watch` channel: the receiver always holds the
/// provider's current knowledge (`Some(account)` while signed in, `None`
/// otherwise), and the value present at subscription time counts as the
/// first state resolution. Implementations must publish every transition
/// they cause, including ones triggered by their own `sign_in`/`sign_out`.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Signs the user in.
    ///
    /// # Returns
    ///
    /// - `Ok(UserAccount)`: the provider accepted and reports this account
    /// - `Err(_)`: the provider rejected the attempt
    async fn sign_in(&self) -> Result<UserAccount>;

    /// Signs the user out.
    ///
    /// Idempotent: signing out while signed out is not an error.
    async fn sign_out(&self) -> Result<()>;

    /// Subscribes to the provider-side account state.
    fn subscribe(&self) -> watch::Receiver<Option<UserAccount>>;
}
