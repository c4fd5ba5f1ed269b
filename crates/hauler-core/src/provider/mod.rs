//! Provider domain module.
//!
//! # Module Structure
//!
//! - `model`: Waste-service provider domain model
//! - `directory`: Provider directory trait

mod directory;
mod model;

// Re-export public API
pub use directory::ProviderDirectory;
pub use model::ServiceProvider;
