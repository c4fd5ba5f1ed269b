//! Camera device port.

use async_trait::async_trait;

use crate::error::Result;

/// Produces encoded frames for an active session.
pub type FrameSource = Box<dyn FnMut() -> Result<Vec<u8>> + Send>;

/// Runs exactly once when a session ends, returning the device.
pub type ReleaseHook = Box<dyn FnOnce() + Send>;

/// An exclusive capture session on a camera device.
///
/// The device stays held for the lifetime of this value and is released on
/// drop, so every exit path (successful capture, explicit cancel, flow
/// teardown, panic unwind) returns the hardware without call-site
/// discipline.
pub struct CameraSession {
    source: FrameSource,
    release: Option<ReleaseHook>,
}

impl CameraSession {
    /// Builds a session from a frame source and a release hook.
    ///
    /// Device implementations call this from `acquire`; the hook must undo
    /// whatever reservation `acquire` made.
    pub fn new(source: FrameSource, release: ReleaseHook) -> Self {
        Self {
            source,
            release: Some(release),
        }
    }

    /// Grabs one encoded frame.
    ///
    /// May be called repeatedly within a session; a failed or rejected
    /// frame does not end the session.
    pub fn capture_frame(&mut self) -> Result<Vec<u8>> {
        (self.source)()
    }
}

impl std::fmt::Debug for CameraSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraSession").finish_non_exhaustive()
    }
}

impl Drop for CameraSession {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

/// An abstract camera device.
#[async_trait]
pub trait CameraDevice: Send + Sync {
    /// Acquires the device for an exclusive capture session.
    ///
    /// # Returns
    ///
    /// - `Ok(CameraSession)`: device acquired; dropping the session
    ///   releases it
    /// - `Err(Media)`: device unavailable or already held
    async fn acquire(&self) -> Result<CameraSession>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[test]
    fn test_drop_runs_the_release_hook_once() {
        let released = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&released);
        let session = CameraSession::new(
            Box::new(|| Ok(vec![1, 2, 3])),
            Box::new(move || flag.store(true, Ordering::SeqCst)),
        );
        assert!(!released.load(Ordering::SeqCst));
        drop(session);
        assert!(released.load(Ordering::SeqCst));
    }

    #[test]
    fn test_capture_frame_can_be_retried() {
        let mut calls = 0u32;
        let mut session = CameraSession::new(
            Box::new(move || {
                calls += 1;
                Ok(vec![calls as u8])
            }),
            Box::new(|| {}),
        );
        assert_eq!(session.capture_frame().unwrap(), vec![1]);
        assert_eq!(session.capture_frame().unwrap(), vec![2]);
    }
}
