//! Profile repository trait.
//!
//! Defines the interface for profile persistence operations.

use async_trait::async_trait;

use super::model::Profile;
use crate::error::Result;

/// An abstract repository for managing profile persistence.
///
/// Profiles are keyed by the owning account uid; each account has at most
/// one. Implementations decide the storage mechanism (in-memory map, remote
/// document store).
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Finds the profile owned by the given account.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Profile))`: profile found
    /// - `Ok(None)`: the account has not completed setup
    /// - `Err(_)`: error occurred during retrieval
    async fn find_by_uid(&self, uid: &str) -> Result<Option<Profile>>;

    /// Saves a profile, replacing any existing one for the same uid.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: profile saved successfully
    /// - `Err(_)`: error occurred during save
    async fn save(&self, profile: &Profile) -> Result<()>;
}
