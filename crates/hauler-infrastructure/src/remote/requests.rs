//! Remote request repository.

use std::sync::Arc;

use async_trait::async_trait;
use hauler_core::error::Result;
use hauler_core::request::{PickupRequest, RequestEvent, RequestRepository};
use tokio::sync::broadcast;

use super::client::BackendClient;

const EVENT_CHANNEL_CAPACITY: usize = 16;

/// Request store talking to the backend's request endpoints.
///
/// The change feed covers appends issued through this instance; the server
/// does not push appends made elsewhere.
pub struct HttpRequestRepository {
    client: Arc<BackendClient>,
    events: broadcast::Sender<RequestEvent>,
}

impl HttpRequestRepository {
    pub fn new(client: Arc<BackendClient>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self { client, events }
    }
}

#[async_trait]
impl RequestRepository for HttpRequestRepository {
    async fn append(&self, request: &PickupRequest) -> Result<()> {
        self.client.post_json("/v1/requests", request).await?;
        tracing::debug!("[HttpRequestRepository] appended request {}", request.id);
        let _ = self.events.send(RequestEvent::Appended {
            user_id: request.user_id.clone(),
        });
        Ok(())
    }

    async fn list_by_owner(&self, user_id: &str) -> Result<Vec<PickupRequest>> {
        let mut owned: Vec<PickupRequest> = self
            .client
            .get_json("/v1/requests", &[("userId", user_id)])
            .await?;
        // Ordering is part of this trait's contract, not the server's
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }

    fn subscribe(&self) -> broadcast::Receiver<RequestEvent> {
        self.events.subscribe()
    }
}
