//! In-memory profile repository.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use hauler_core::error::Result;
use hauler_core::profile::{Profile, ProfileRepository};
use tokio::sync::RwLock;

/// Profile store backed by a uid-keyed map.
#[derive(Clone, Default)]
pub struct InMemoryProfileRepository {
    profiles: Arc<RwLock<HashMap<String, Profile>>>,
}

impl InMemoryProfileRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with one profile.
    pub fn with_seed(profile: Profile) -> Self {
        let mut profiles = HashMap::new();
        profiles.insert(profile.uid.clone(), profile);
        Self {
            profiles: Arc::new(RwLock::new(profiles)),
        }
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn find_by_uid(&self, uid: &str) -> Result<Option<Profile>> {
        Ok(self.profiles.read().await.get(uid).cloned())
    }

    async fn save(&self, profile: &Profile) -> Result<()> {
        self.profiles
            .write()
            .await
            .insert(profile.uid.clone(), profile.clone());
        tracing::debug!("[InMemoryProfileRepository] saved profile for {}", profile.uid);
        Ok(())
    }
}
