//! Application layer for Hauler.
//!
//! This crate provides the flows that coordinate between domain ports and
//! front ends: session context, route gating, profile setup, request
//! submission, and request history.

pub mod auth;
pub mod profile_setup;
pub mod request_form;
pub mod request_history;
pub mod route;

pub use auth::{AuthContext, AuthState};
pub use profile_setup::{ProfileForm, ProfileSetupFlow, SetupEntry};
pub use request_form::{FormSnapshot, RequestForm};
pub use request_history::{RequestHistory, format_submitted_at};
pub use route::{Route, RouteGate};
