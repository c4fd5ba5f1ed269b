//! Remote provider directory.

use std::sync::Arc;

use async_trait::async_trait;
use hauler_core::error::Result;
use hauler_core::provider::{ProviderDirectory, ServiceProvider};

use super::client::BackendClient;

/// Provider directory talking to the backend's provider listing.
pub struct HttpProviderDirectory {
    client: Arc<BackendClient>,
}

impl HttpProviderDirectory {
    pub fn new(client: Arc<BackendClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProviderDirectory for HttpProviderDirectory {
    async fn list_active(&self) -> Result<Vec<ServiceProvider>> {
        let providers: Vec<ServiceProvider> = self
            .client
            .get_json("/v1/providers", &[("active", "true")])
            .await?;
        // The selectable set is active providers only, whatever the server returns
        Ok(providers.into_iter().filter(|p| p.active).collect())
    }
}
