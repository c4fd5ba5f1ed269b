//! Provider directory trait.

use async_trait::async_trait;

use super::model::ServiceProvider;
use crate::error::Result;

/// An abstract directory of waste-service providers.
#[async_trait]
pub trait ProviderDirectory: Send + Sync {
    /// Lists the providers currently accepting subscriptions.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<ServiceProvider>)`: active providers only
    /// - `Err(_)`: error occurred during listing
    async fn list_active(&self) -> Result<Vec<ServiceProvider>>;
}
