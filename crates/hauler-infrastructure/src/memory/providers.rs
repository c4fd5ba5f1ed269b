//! In-memory provider directory.

use async_trait::async_trait;
use hauler_core::error::Result;
use hauler_core::provider::{ProviderDirectory, ServiceProvider};

/// Provider directory backed by a fixed list.
pub struct InMemoryProviderDirectory {
    providers: Vec<ServiceProvider>,
}

impl InMemoryProviderDirectory {
    pub fn new(providers: Vec<ServiceProvider>) -> Self {
        Self { providers }
    }
}

#[async_trait]
impl ProviderDirectory for InMemoryProviderDirectory {
    async fn list_active(&self) -> Result<Vec<ServiceProvider>> {
        Ok(self
            .providers
            .iter()
            .filter(|provider| provider.active)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[tokio::test]
    async fn test_inactive_providers_are_not_listed() {
        let directory = InMemoryProviderDirectory::new(seed::demo_providers());
        let active = directory.list_active().await.unwrap();
        assert_eq!(active.len(), 3);
        assert!(active.iter().all(|p| p.active));
        assert!(!active.iter().any(|p| p.name == "Urban Waste Solutions"));
    }
}
