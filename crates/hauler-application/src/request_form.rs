//! Request submission flow.
//!
//! Collects the pickup address, waste type, optional photo (file attach or
//! live camera capture), and optional location fix, then turns them into a
//! stored request. Field state survives failed submissions so nothing the
//! user typed is lost; a successful submission resets everything except the
//! address, which is the field most likely to repeat.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use hauler_core::error::{HaulerError, Result};
use hauler_core::media::{CameraDevice, CameraSession, GeolocationService, ImageAttachment};
use hauler_core::request::{GeoPoint, PickupRequest, RequestRepository, WasteType};
use tokio::task::JoinHandle;

use crate::auth::AuthContext;

/// How long the success notice stays up before clearing itself.
const SUCCESS_NOTICE_TTL: Duration = Duration::from_secs(3);

/// Display-relevant view of the form.
#[derive(Debug, Clone)]
pub struct FormSnapshot {
    pub address: String,
    pub waste_type: Option<WasteType>,
    pub has_photo: bool,
    pub location: Option<GeoPoint>,
    pub camera_active: bool,
    pub locating: bool,
    pub success: bool,
}

struct FormState {
    address: String,
    waste_type: Option<WasteType>,
    image: Option<ImageAttachment>,
    location: Option<GeoPoint>,
    camera: Option<CameraSession>,
    locating: bool,
    success: bool,
    success_timer: Option<JoinHandle<()>>,
}

pub struct RequestForm {
    auth: Arc<AuthContext>,
    requests: Arc<dyn RequestRepository>,
    camera: Arc<dyn CameraDevice>,
    locator: Arc<dyn GeolocationService>,
    state: Arc<Mutex<FormState>>,
    success_ttl: Duration,
}

impl RequestForm {
    /// Creates the form, prefilling the address from the session profile.
    pub fn new(
        auth: Arc<AuthContext>,
        requests: Arc<dyn RequestRepository>,
        camera: Arc<dyn CameraDevice>,
        locator: Arc<dyn GeolocationService>,
    ) -> Self {
        let address = auth
            .state()
            .profile
            .map(|profile| profile.address)
            .unwrap_or_default();
        Self {
            auth,
            requests,
            camera,
            locator,
            state: Arc::new(Mutex::new(FormState {
                address,
                waste_type: None,
                image: None,
                location: None,
                camera: None,
                locating: false,
                success: false,
                success_timer: None,
            })),
            success_ttl: SUCCESS_NOTICE_TTL,
        }
    }

    /// Overrides how long the success notice stays up.
    pub fn with_success_ttl(mut self, ttl: Duration) -> Self {
        self.success_ttl = ttl;
        self
    }

    pub fn set_address(&self, address: impl Into<String>) {
        self.state.lock().unwrap().address = address.into();
    }

    pub fn set_waste_type(&self, waste_type: WasteType) {
        self.state.lock().unwrap().waste_type = Some(waste_type);
    }

    /// Attaches a photo from raw file bytes, replacing any previous one.
    ///
    /// Blocked while a camera capture is in progress; the two photo sources
    /// are exclusive. Oversized bytes are rejected and the previous
    /// attachment, if any, stays in place.
    pub fn attach_photo_bytes(&self, content_type: &str, bytes: &[u8]) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        if state.camera.is_some() {
            return Err(HaulerError::media("close the camera before attaching a file"));
        }
        let attachment = ImageAttachment::from_bytes(content_type, bytes)?;
        state.image = Some(attachment);
        Ok(())
    }

    pub fn clear_photo(&self) {
        self.state.lock().unwrap().image = None;
    }

    /// Acquires the camera and opens a capture session on the form.
    ///
    /// Fails if a session is already open or a photo is already attached.
    pub async fn open_camera(&self) -> Result<()> {
        {
            let state = self.state.lock().unwrap();
            if state.camera.is_some() {
                return Err(HaulerError::media("camera capture is already in progress"));
            }
            if state.image.is_some() {
                return Err(HaulerError::media(
                    "remove the attached photo before opening the camera",
                ));
            }
        }

        let session = self.camera.acquire().await?;
        let mut state = self.state.lock().unwrap();
        if state.camera.is_some() {
            // Lost the race to a concurrent open; dropping `session`
            // releases the device
            return Err(HaulerError::media("camera capture is already in progress"));
        }
        state.camera = Some(session);
        tracing::debug!("[RequestForm] camera session opened");
        Ok(())
    }

    /// Captures a frame from the open session and attaches it.
    ///
    /// A successful capture closes the session. An oversized frame is
    /// rejected but leaves the session open for another try; a device
    /// fault ends the session.
    pub fn capture_photo(&self) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        let Some(session) = state.camera.as_mut() else {
            return Err(HaulerError::media("no camera capture in progress"));
        };

        let frame = match session.capture_frame() {
            Ok(frame) => frame,
            Err(e) => {
                state.camera = None;
                return Err(e);
            }
        };
        let attachment = ImageAttachment::from_bytes("image/jpeg", &frame)?;
        state.image = Some(attachment);
        state.camera = None;
        Ok(())
    }

    /// Closes the capture session without attaching anything.
    pub fn cancel_camera(&self) {
        self.state.lock().unwrap().camera = None;
    }

    /// Requests a location fix and attaches it to the form.
    ///
    /// Only one fix may be in flight at a time. A denied or failed fix
    /// leaves the form unchanged.
    pub async fn fetch_location(&self) -> Result<GeoPoint> {
        {
            let mut state = self.state.lock().unwrap();
            if state.locating {
                return Err(HaulerError::media("a location fix is already in progress"));
            }
            state.locating = true;
        }

        // The flag must clear on every exit path, including a caller
        // dropping this future at the await
        struct LocatingReset(Arc<Mutex<FormState>>);
        impl Drop for LocatingReset {
            fn drop(&mut self) {
                if let Ok(mut state) = self.0.lock() {
                    state.locating = false;
                }
            }
        }
        let _reset = LocatingReset(Arc::clone(&self.state));

        match self.locator.current_position().await {
            Ok(point) => {
                self.state.lock().unwrap().location = Some(point);
                tracing::debug!("[RequestForm] location fix attached: {}", point.maps_url());
                Ok(point)
            }
            Err(e) => {
                tracing::warn!("[RequestForm] location fix failed: {}", e);
                Err(e)
            }
        }
    }

    /// Validates the form and appends the request to the store.
    ///
    /// On success the waste type, photo, and location reset, the address is
    /// kept, and the success notice turns on and clears itself after the
    /// notice TTL. On any failure the form keeps every field as-is.
    pub async fn submit(&self) -> Result<PickupRequest> {
        let session = self.auth.state();
        let Some(account) = session.account else {
            return Err(HaulerError::auth("sign in before submitting a request"));
        };
        let Some(profile) = session.profile else {
            return Err(HaulerError::auth(
                "complete profile setup before submitting a request",
            ));
        };

        let request = {
            let state = self.state.lock().unwrap();
            if state.address.trim().is_empty() {
                return Err(HaulerError::validation("address", "address is required"));
            }
            let Some(waste_type) = state.waste_type else {
                return Err(HaulerError::validation("wasteType", "select a waste type"));
            };
            PickupRequest::new(
                &account,
                profile.service_provider.clone(),
                state.address.trim(),
                waste_type,
                state.image.clone(),
                state.location,
            )
        };

        self.requests.append(&request).await?;
        tracing::info!("[RequestForm] request {} submitted", request.id);

        let mut state = self.state.lock().unwrap();
        state.waste_type = None;
        state.image = None;
        state.location = None;
        state.success = true;
        if let Some(previous) = state.success_timer.take() {
            previous.abort();
        }
        let shared = Arc::clone(&self.state);
        let ttl = self.success_ttl;
        state.success_timer = Some(tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            let mut state = shared.lock().unwrap();
            state.success = false;
            state.success_timer = None;
        }));
        drop(state);

        Ok(request)
    }

    pub fn snapshot(&self) -> FormSnapshot {
        let state = self.state.lock().unwrap();
        FormSnapshot {
            address: state.address.clone(),
            waste_type: state.waste_type,
            has_photo: state.image.is_some(),
            location: state.location,
            camera_active: state.camera.is_some(),
            locating: state.locating,
            success: state.success,
        }
    }
}

impl Drop for RequestForm {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.lock() {
            if let Some(timer) = state.success_timer.take() {
                timer.abort();
            }
            // Dropping an open session releases the device
            state.camera = None;
        }
    }
}
