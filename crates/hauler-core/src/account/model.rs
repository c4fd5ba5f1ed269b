//! Signed-in account domain model.

use serde::{Deserialize, Serialize};

/// The signed-in user as reported by the identity provider.
///
/// This is a snapshot of provider-side data. It carries no application
/// state; the service profile a user fills in after first sign-in lives in
/// [`crate::profile::Profile`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    /// Provider-issued stable identifier
    pub uid: String,
    /// Primary email address
    pub email: String,
    /// Human-readable display name
    pub display_name: String,
    /// Avatar URL, when the provider supplies one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let account = UserAccount {
            uid: "u-1".to_string(),
            email: "a@example.com".to_string(),
            display_name: "Ada".to_string(),
            photo_url: None,
        };
        let json = serde_json::to_value(&account).unwrap();
        assert_eq!(json["displayName"], "Ada");
        assert!(json.get("photoUrl").is_none());
    }
}
