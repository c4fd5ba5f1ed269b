//! Waste-service provider domain model.

use serde::{Deserialize, Serialize};

/// A waste-collection service company users can subscribe to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceProvider {
    /// Stable identifier
    pub id: String,
    /// Company name shown to users and stored on profiles
    pub name: String,
    /// Inactive providers exist in the directory but are not selectable
    pub active: bool,
}
