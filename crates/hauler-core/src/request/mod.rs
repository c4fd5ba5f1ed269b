//! Pickup request domain module.
//!
//! # Module Structure
//!
//! - `model`: Request, waste type, status, and position models
//! - `repository`: Request repository trait and change events

mod model;
mod repository;

// Re-export public API
pub use model::{GeoPoint, PickupRequest, RequestStatus, StatusTone, WasteType};
pub use repository::{RequestEvent, RequestRepository};
