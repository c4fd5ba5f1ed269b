//! Simulated positioning services.

use std::time::Duration;

use async_trait::async_trait;
use hauler_core::error::{HaulerError, Result};
use hauler_core::media::GeolocationService;
use hauler_core::request::GeoPoint;

/// A locator that always resolves to one position.
pub struct FixedGeolocation {
    point: GeoPoint,
    delay: Duration,
}

impl FixedGeolocation {
    pub fn new(point: GeoPoint) -> Self {
        Self {
            point,
            delay: Duration::ZERO,
        }
    }

    /// Adds a simulated fix delay, so in-progress states are observable.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl GeolocationService for FixedGeolocation {
    async fn current_position(&self) -> Result<GeoPoint> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(self.point)
    }
}

/// A locator that always refuses, like a user denying the permission
/// prompt.
pub struct DeniedGeolocation;

#[async_trait]
impl GeolocationService for DeniedGeolocation {
    async fn current_position(&self) -> Result<GeoPoint> {
        Err(HaulerError::media("location permission denied"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixed_locator_returns_its_point() {
        let locator = FixedGeolocation::new(GeoPoint::new(7.539487, 8.514175));
        let fix = locator.current_position().await.unwrap();
        assert_eq!(fix, GeoPoint::new(7.539487, 8.514175));
    }

    #[tokio::test]
    async fn test_denied_locator_reports_a_media_error() {
        let err = DeniedGeolocation.current_position().await.unwrap_err();
        assert!(err.is_media());
    }
}
