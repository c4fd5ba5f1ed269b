//! Media module: photo payloads and device ports.
//!
//! # Module Structure
//!
//! - `image`: Photo attachment payload with the size cap
//! - `camera`: Camera device trait and the scoped capture session
//! - `geolocation`: One-shot positioning trait

mod camera;
mod geolocation;
mod image;

// Re-export public API
pub use camera::{CameraDevice, CameraSession, FrameSource, ReleaseHook};
pub use geolocation::GeolocationService;
pub use image::{ImageAttachment, MAX_IMAGE_BYTES};
