//! Account domain module.
//!
//! This module contains the signed-in account model and the identity
//! provider port.
//!
//! # Module Structure
//!
//! - `model`: Signed-in account domain model
//! - `identity`: Identity provider trait

mod identity;
mod model;

// Re-export public API
pub use identity::IdentityProvider;
pub use model::UserAccount;
