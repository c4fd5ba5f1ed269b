//! Simulated camera devices.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use hauler_core::error::{HaulerError, Result};
use hauler_core::media::{CameraDevice, CameraSession};

/// A camera that serves one fixed encoded frame.
///
/// Enforces exclusive access: a second `acquire` fails until the session
/// from the first is dropped.
pub struct StaticImageCamera {
    frame: Vec<u8>,
    in_use: Arc<AtomicBool>,
}

impl StaticImageCamera {
    pub fn new(frame: Vec<u8>) -> Self {
        Self {
            frame,
            in_use: Arc::new(AtomicBool::new(false)),
        }
    }
}

#[async_trait]
impl CameraDevice for StaticImageCamera {
    async fn acquire(&self) -> Result<CameraSession> {
        if self.in_use.swap(true, Ordering::SeqCst) {
            return Err(HaulerError::media("camera is already in use"));
        }
        tracing::debug!("[StaticImageCamera] device acquired");
        let frame = self.frame.clone();
        let in_use = Arc::clone(&self.in_use);
        Ok(CameraSession::new(
            Box::new(move || Ok(frame.clone())),
            Box::new(move || {
                in_use.store(false, Ordering::SeqCst);
                tracing::debug!("[StaticImageCamera] device released");
            }),
        ))
    }
}

/// A camera that always fails to open.
///
/// Stands in for missing hardware or denied permission, so the
/// file-attach fallback path can be exercised.
pub struct UnavailableCamera;

#[async_trait]
impl CameraDevice for UnavailableCamera {
    async fn acquire(&self) -> Result<CameraSession> {
        Err(HaulerError::media(
            "could not access camera, use a photo file instead",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[tokio::test]
    async fn test_captures_the_configured_frame() {
        let camera = StaticImageCamera::new(seed::demo_frame());
        let mut session = camera.acquire().await.unwrap();
        assert_eq!(session.capture_frame().unwrap(), seed::demo_frame());
    }

    #[tokio::test]
    async fn test_second_acquire_fails_while_held() {
        let camera = StaticImageCamera::new(seed::demo_frame());
        let session = camera.acquire().await.unwrap();
        let err = camera.acquire().await.unwrap_err();
        assert!(err.is_media());
        drop(session);
    }

    #[tokio::test]
    async fn test_dropping_the_session_releases_the_device() {
        let camera = StaticImageCamera::new(seed::demo_frame());
        drop(camera.acquire().await.unwrap());
        assert!(camera.acquire().await.is_ok());
    }

    #[tokio::test]
    async fn test_unavailable_camera_reports_a_media_error() {
        let err = UnavailableCamera.acquire().await.unwrap_err();
        assert!(err.is_media());
    }
}
