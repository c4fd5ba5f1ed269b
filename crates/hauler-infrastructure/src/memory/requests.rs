//! In-memory request repository.

use std::sync::Arc;

use async_trait::async_trait;
use hauler_core::error::Result;
use hauler_core::request::{PickupRequest, RequestEvent, RequestRepository};
use tokio::sync::{RwLock, broadcast};

/// Appends are rare and handlers re-fetch, so a small buffer is plenty.
const EVENT_CHANNEL_CAPACITY: usize = 16;

/// Request store backed by a shared vector.
#[derive(Clone)]
pub struct InMemoryRequestRepository {
    requests: Arc<RwLock<Vec<PickupRequest>>>,
    events: broadcast::Sender<RequestEvent>,
}

impl InMemoryRequestRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::with_seed(Vec::new())
    }

    /// Creates a store pre-populated with the given requests.
    pub fn with_seed(requests: Vec<PickupRequest>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            requests: Arc::new(RwLock::new(requests)),
            events,
        }
    }
}

impl Default for InMemoryRequestRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RequestRepository for InMemoryRequestRepository {
    async fn append(&self, request: &PickupRequest) -> Result<()> {
        self.requests.write().await.push(request.clone());
        tracing::debug!("[InMemoryRequestRepository] appended request {}", request.id);
        // No receivers just means nobody is watching yet
        let _ = self.events.send(RequestEvent::Appended {
            user_id: request.user_id.clone(),
        });
        Ok(())
    }

    async fn list_by_owner(&self, user_id: &str) -> Result<Vec<PickupRequest>> {
        let mut owned: Vec<PickupRequest> = self
            .requests
            .read()
            .await
            .iter()
            .filter(|request| request.user_id == user_id)
            .cloned()
            .collect();
        // Stable sort keeps same-instant requests in insertion order
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }

    fn subscribe(&self) -> broadcast::Receiver<RequestEvent> {
        self.events.subscribe()
    }
}
