//! Profile domain module.
//!
//! # Module Structure
//!
//! - `model`: Service profile domain model
//! - `repository`: Profile repository trait

mod model;
mod repository;

// Re-export public API
pub use model::Profile;
pub use repository::ProfileRepository;
