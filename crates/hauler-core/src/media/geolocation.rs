//! Geolocation port.

use async_trait::async_trait;

use crate::error::Result;
use crate::request::GeoPoint;

/// An abstract positioning service.
#[async_trait]
pub trait GeolocationService: Send + Sync {
    /// Takes a one-shot position fix.
    ///
    /// # Returns
    ///
    /// - `Ok(GeoPoint)`: fix acquired
    /// - `Err(Media)`: permission denied or positioning unavailable
    async fn current_position(&self) -> Result<GeoPoint>;
}
