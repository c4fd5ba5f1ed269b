//! Domain layer for the Hauler waste-pickup request tracker.
//!
//! Holds the domain models (accounts, profiles, providers, requests, photo
//! payloads) and the ports the rest of the system is wired through: identity
//! provider, profile store, provider directory, request store, camera, and
//! geolocation. Implementations live in `hauler-infrastructure`; flows that
//! drive them live in `hauler-application`.

pub mod account;
pub mod error;
pub mod media;
pub mod profile;
pub mod provider;
pub mod request;

// Re-export common error type
pub use error::{HaulerError, Result};
