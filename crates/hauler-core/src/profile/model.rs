//! Service profile domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::account::UserAccount;

/// A user's service profile.
///
/// Created once after first sign-in and keyed by the account uid. Carries
/// the pickup address, contact phone, and the chosen waste-service provider,
/// plus a snapshot of the account's display fields taken at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Owning account uid
    pub uid: String,
    /// Display name snapshot from the account
    pub display_name: String,
    /// Email snapshot from the account
    pub email: String,
    /// Avatar URL snapshot from the account
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    /// Street address pickups default to
    pub address: String,
    /// Contact phone number
    pub phone: String,
    /// Name of the chosen waste-service provider
    pub service_provider: String,
    /// When the profile was created
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// Builds a profile for the given account, snapshotting its display
    /// fields and stamping the creation time.
    pub fn new(
        account: &UserAccount,
        address: impl Into<String>,
        phone: impl Into<String>,
        service_provider: impl Into<String>,
    ) -> Self {
        Self {
            uid: account.uid.clone(),
            display_name: account.display_name.clone(),
            email: account.email.clone(),
            photo_url: account.photo_url.clone(),
            address: address.into(),
            phone: phone.into(),
            service_provider: service_provider.into(),
            created_at: Utc::now(),
        }
    }
}
