//! Workshop seed data.
//!
//! A small, fixed data set so the in-memory backend boots into something
//! demonstrable: one account with a completed profile, four providers (one
//! inactive), and two historical requests either side of the sort boundary.

use chrono::{TimeZone, Utc};
use hauler_core::account::UserAccount;
use hauler_core::profile::Profile;
use hauler_core::provider::ServiceProvider;
use hauler_core::request::{GeoPoint, PickupRequest, RequestStatus, WasteType};

/// The account the in-memory identity provider signs in.
pub fn demo_account() -> UserAccount {
    UserAccount {
        uid: "mock-user-123".to_string(),
        email: "ciroma_ca@example.com".to_string(),
        display_name: "Chiroma Chukwuma Adekunle".to_string(),
        photo_url: Some("https://avatars.example.com/chiroma.png".to_string()),
    }
}

/// A completed service profile for [`demo_account`].
pub fn demo_profile() -> Profile {
    let account = demo_account();
    Profile {
        uid: account.uid,
        display_name: account.display_name,
        email: account.email,
        photo_url: account.photo_url,
        address: "AJ Ahmadu Plaza, Plot 160 Makurdi Rd, Lafia".to_string(),
        phone: "+234 903 902 2216".to_string(),
        service_provider: "GreenCycle Waste Services".to_string(),
        created_at: Utc.with_ymd_and_hms(2025, 9, 20, 10, 0, 0).unwrap(),
    }
}

/// The provider directory; Urban Waste Solutions is deliberately inactive
/// so directory filtering is visible in demos.
pub fn demo_providers() -> Vec<ServiceProvider> {
    vec![
        ServiceProvider {
            id: "1".to_string(),
            name: "GreenCycle Waste Services".to_string(),
            active: true,
        },
        ServiceProvider {
            id: "2".to_string(),
            name: "EcoClean Solutions".to_string(),
            active: true,
        },
        ServiceProvider {
            id: "3".to_string(),
            name: "City Waste Management".to_string(),
            active: true,
        },
        ServiceProvider {
            id: "4".to_string(),
            name: "Urban Waste Solutions".to_string(),
            active: false,
        },
    ]
}

/// Two historical requests for [`demo_account`], deliberately out of
/// submission order so newest-first sorting is observable.
pub fn demo_requests() -> Vec<PickupRequest> {
    let account = demo_account();
    let profile = demo_profile();
    vec![
        PickupRequest {
            id: "1".to_string(),
            user_id: account.uid.clone(),
            user_email: account.email.clone(),
            user_name: account.display_name.clone(),
            address: profile.address.clone(),
            waste_type: WasteType::Recyclable,
            image: None,
            location: Some(GeoPoint::new(7.539487, 8.514175)),
            service_provider: profile.service_provider.clone(),
            status: RequestStatus::Completed,
            created_at: Utc.with_ymd_and_hms(2025, 10, 1, 9, 30, 0).unwrap(),
        },
        PickupRequest {
            id: "2".to_string(),
            user_id: account.uid,
            user_email: account.email,
            user_name: account.display_name,
            address: profile.address,
            waste_type: WasteType::Organic,
            image: None,
            location: None,
            service_provider: profile.service_provider,
            status: RequestStatus::Pending,
            created_at: Utc.with_ymd_and_hms(2025, 10, 8, 14, 30, 0).unwrap(),
        },
    ]
}

/// A minimal JPEG the static camera serves as its frame.
pub fn demo_frame() -> Vec<u8> {
    let mut frame = vec![
        0xFF, 0xD8, // SOI
        0xFF, 0xE0, 0x00, 0x10, // APP0
        b'J', b'F', b'I', b'F', 0x00, 0x01, 0x01, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00,
    ];
    frame.extend_from_slice(&[0x2A; 512]);
    frame.extend_from_slice(&[0xFF, 0xD9]); // EOI
    frame
}
