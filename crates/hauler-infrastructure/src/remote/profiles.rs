//! Remote profile repository.

use std::sync::Arc;

use async_trait::async_trait;
use hauler_core::error::Result;
use hauler_core::profile::{Profile, ProfileRepository};

use super::client::BackendClient;

/// Profile store talking to the backend's profile endpoints.
pub struct HttpProfileRepository {
    client: Arc<BackendClient>,
}

impl HttpProfileRepository {
    pub fn new(client: Arc<BackendClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProfileRepository for HttpProfileRepository {
    async fn find_by_uid(&self, uid: &str) -> Result<Option<Profile>> {
        self.client
            .get_json_opt(&format!("/v1/users/{}/profile", uid))
            .await
    }

    async fn save(&self, profile: &Profile) -> Result<()> {
        self.client
            .put_json(&format!("/v1/users/{}/profile", profile.uid), profile)
            .await?;
        tracing::debug!("[HttpProfileRepository] saved profile for {}", profile.uid);
        Ok(())
    }
}
