//! Request repository trait.
//!
//! Defines the interface for request persistence and change notification.

use async_trait::async_trait;
use tokio::sync::broadcast;

use super::model::PickupRequest;
use crate::error::Result;

/// A change notification from a request store.
#[derive(Debug, Clone)]
pub enum RequestEvent {
    /// A request was appended for the given owner
    Appended { user_id: String },
}

/// An abstract repository for pickup requests.
///
/// The store is append-only from the client's point of view: requests are
/// created and later read back, never edited here. Status changes happen on
/// the provider side and show up on the next read.
#[async_trait]
pub trait RequestRepository: Send + Sync {
    /// Appends a new request to the store.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: request stored
    /// - `Err(_)`: error occurred during the write; nothing was stored
    async fn append(&self, request: &PickupRequest) -> Result<()>;

    /// Lists the owner's requests, newest first.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<PickupRequest>)`: the owner's requests ordered by
    ///   non-increasing creation time
    /// - `Err(_)`: error occurred during retrieval
    async fn list_by_owner(&self, user_id: &str) -> Result<Vec<PickupRequest>>;

    /// Subscribes to append events.
    ///
    /// Implementations backed by a remote store may only observe appends
    /// issued through this process; a push channel from the server is not
    /// part of this contract.
    fn subscribe(&self) -> broadcast::Receiver<RequestEvent>;
}
