//! Pickup request domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use uuid::Uuid;

use crate::account::UserAccount;
use crate::media::ImageAttachment;

/// Category of waste a pickup request is for.
///
/// Display and wire strings match the labels users see, so `to_string`,
/// `parse`, and serde all agree.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum WasteType {
    #[serde(rename = "General Waste")]
    #[strum(serialize = "General Waste")]
    GeneralWaste,
    Recyclable,
    Organic,
    Electronic,
    Hazardous,
}

/// Lifecycle status of a pickup request.
///
/// New requests are always created `Pending`; the other statuses are
/// assigned by the provider side and only ever read here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum RequestStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

/// Presentation tone for a status badge.
///
/// Front ends map tones to whatever styling they have (terminal colors,
/// CSS classes); the status-to-tone assignment itself is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Warning,
    Info,
    Success,
    Danger,
}

impl RequestStatus {
    /// The fixed display tone for this status.
    pub const fn tone(&self) -> StatusTone {
        match self {
            Self::Pending => StatusTone::Warning,
            Self::InProgress => StatusTone::Info,
            Self::Completed => StatusTone::Success,
            Self::Cancelled => StatusTone::Danger,
        }
    }
}

/// A geographic position fix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// URL opening this position in an external map viewer.
    pub fn maps_url(&self) -> String {
        format!(
            "https://www.google.com/maps?q={},{}",
            self.latitude, self.longitude
        )
    }
}

/// One waste pickup request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickupRequest {
    /// Unique identifier (UUID v4)
    pub id: String,
    /// Owning account uid
    pub user_id: String,
    /// Owner email snapshot taken at submission
    pub user_email: String,
    /// Owner display name snapshot taken at submission
    pub user_name: String,
    /// Pickup street address
    pub address: String,
    /// Category of waste to collect
    pub waste_type: WasteType,
    /// Optional photo of the waste
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageAttachment>,
    /// Optional position fix taken at submission
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
    /// Provider name copied from the owner's profile
    pub service_provider: String,
    /// Lifecycle status
    pub status: RequestStatus,
    /// When the request was submitted; sort key for history views
    pub created_at: DateTime<Utc>,
}

impl PickupRequest {
    /// Builds a new request for the given account.
    ///
    /// The id is freshly generated, the status is forced to `Pending`, and
    /// the creation time is stamped here, so callers cannot submit a request
    /// in any other initial state.
    pub fn new(
        account: &UserAccount,
        service_provider: impl Into<String>,
        address: impl Into<String>,
        waste_type: WasteType,
        image: Option<ImageAttachment>,
        location: Option<GeoPoint>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: account.uid.clone(),
            user_email: account.email.clone(),
            user_name: account.display_name.clone(),
            address: address.into(),
            waste_type,
            image,
            location,
            service_provider: service_provider.into(),
            status: RequestStatus::Pending,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn account() -> UserAccount {
        UserAccount {
            uid: "u-1".to_string(),
            email: "u1@example.com".to_string(),
            display_name: "U One".to_string(),
            photo_url: None,
        }
    }

    #[test]
    fn test_waste_type_round_trips_display_and_parse() {
        for waste_type in WasteType::iter() {
            let label = waste_type.to_string();
            assert_eq!(label.parse::<WasteType>().unwrap(), waste_type);
        }
        assert_eq!(WasteType::GeneralWaste.to_string(), "General Waste");
    }

    #[test]
    fn test_status_wire_strings_are_kebab_case() {
        let json = serde_json::to_string(&RequestStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
        let back: RequestStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(back, RequestStatus::Cancelled);
    }

    #[test]
    fn test_status_tones_are_fixed() {
        assert_eq!(RequestStatus::Pending.tone(), StatusTone::Warning);
        assert_eq!(RequestStatus::InProgress.tone(), StatusTone::Info);
        assert_eq!(RequestStatus::Completed.tone(), StatusTone::Success);
        assert_eq!(RequestStatus::Cancelled.tone(), StatusTone::Danger);
    }

    #[test]
    fn test_maps_url_embeds_the_pair() {
        let point = GeoPoint::new(7.539487, 8.514175);
        assert_eq!(
            point.maps_url(),
            "https://www.google.com/maps?q=7.539487,8.514175"
        );
    }

    #[test]
    fn test_new_requests_are_always_pending() {
        let request = PickupRequest::new(
            &account(),
            "GreenCycle",
            "5 River Rd",
            WasteType::Organic,
            None,
            None,
        );
        assert_eq!(request.status, RequestStatus::Pending);
        assert_eq!(request.user_id, "u-1");
        assert_eq!(request.user_email, "u1@example.com");
        assert_eq!(request.user_name, "U One");
        assert!(!request.id.is_empty());
    }

    #[test]
    fn test_waste_type_wire_string_keeps_the_space() {
        let json = serde_json::to_string(&WasteType::GeneralWaste).unwrap();
        assert_eq!(json, "\"General Waste\"");
    }
}
