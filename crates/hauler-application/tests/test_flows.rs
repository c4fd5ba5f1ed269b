use std::sync::Arc;
use std::time::Duration;

use hauler_application::{
    AuthContext, ProfileForm, ProfileSetupFlow, RequestForm, RequestHistory, Route, RouteGate,
    SetupEntry,
};
use hauler_core::request::{RequestStatus, WasteType};
use hauler_infrastructure::{
    FixedGeolocation, InMemoryIdentityProvider, InMemoryProfileRepository,
    InMemoryProviderDirectory, InMemoryRequestRepository, StaticImageCamera, seed,
};

struct World {
    auth: Arc<AuthContext>,
    profiles: Arc<InMemoryProfileRepository>,
    requests: Arc<InMemoryRequestRepository>,
}

/// Fresh backend with a resolvable account but nothing else stored.
async fn first_run_world() -> World {
    let identity = Arc::new(
        InMemoryIdentityProvider::signed_out(seed::demo_account())
            .with_sign_in_delay(Duration::ZERO),
    );
    let profiles = Arc::new(InMemoryProfileRepository::new());
    let requests = Arc::new(InMemoryRequestRepository::new());
    let auth = AuthContext::start(identity, profiles.clone());
    auth.ready().await;
    World {
        auth,
        profiles,
        requests,
    }
}

/// Backend seeded like the demo deployment: signed in, profile and two
/// historical requests present.
async fn seeded_world() -> World {
    let identity = Arc::new(
        InMemoryIdentityProvider::seeded(seed::demo_account()).with_sign_in_delay(Duration::ZERO),
    );
    let profiles = Arc::new(InMemoryProfileRepository::with_seed(seed::demo_profile()));
    let requests = Arc::new(InMemoryRequestRepository::with_seed(seed::demo_requests()));
    let auth = AuthContext::start(identity, profiles.clone());
    auth.ready().await;
    World {
        auth,
        profiles,
        requests,
    }
}

fn request_form(world: &World) -> RequestForm {
    RequestForm::new(
        world.auth.clone(),
        world.requests.clone(),
        Arc::new(StaticImageCamera::new(seed::demo_frame())),
        Arc::new(FixedGeolocation::new(hauler_core::request::GeoPoint::new(
            7.539487, 8.514175,
        ))),
    )
}

#[tokio::test]
async fn test_first_run_from_login_to_dashboard() {
    let world = first_run_world().await;

    // Signed out: every requested route lands on login
    let state = world.auth.state();
    assert_eq!(
        RouteGate::resolve(&state, Route::Dashboard),
        Some(Route::Login)
    );

    // Sign in; no profile yet, so setup is forced
    world.auth.sign_in().await.expect("Should sign in");
    let state = world.auth.state();
    assert_eq!(
        RouteGate::resolve(&state, Route::Dashboard),
        Some(Route::ProfileSetup)
    );

    // Setup lists the three active providers
    let setup = ProfileSetupFlow::new(
        world.auth.clone(),
        world.profiles.clone(),
        Arc::new(InMemoryProviderDirectory::new(seed::demo_providers())),
    );
    match setup.enter().await.expect("Should enter setup") {
        SetupEntry::Form(providers) => assert_eq!(providers.len(), 3),
        SetupEntry::AlreadyComplete => panic!("Should need setup"),
    }

    setup
        .submit(&ProfileForm {
            address: "12 Lagos Close".into(),
            phone: "+234 800 000 0000".into(),
            service_provider: "GreenCycle Waste Services".into(),
        })
        .await
        .expect("Should save the profile");

    // Profile present: login and setup both forward to the dashboard
    let state = world.auth.state();
    assert!(state.has_profile());
    assert_eq!(
        RouteGate::resolve(&state, Route::Login),
        Some(Route::Dashboard)
    );
    assert_eq!(
        RouteGate::resolve(&state, Route::ProfileSetup),
        Some(Route::Dashboard)
    );

    world.auth.shutdown();
}

#[tokio::test]
async fn test_submission_lands_on_top_of_the_history() {
    let world = seeded_world().await;
    let form = request_form(&world);
    let history = RequestHistory::new(world.auth.clone(), world.requests.clone());

    // Address comes prefilled from the profile; override it for this pickup
    form.set_address("5 River Rd");
    form.set_waste_type(WasteType::Organic);
    form.fetch_location().await.expect("Should get a fix");

    let submitted = form.submit().await.expect("Should submit");
    assert_eq!(submitted.status, RequestStatus::Pending);

    let entries = history.load().await.expect("Should load history");
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].id, submitted.id);
    assert_eq!(entries[0].address, "5 River Rd");
    assert_eq!(
        entries[0].location.expect("Should keep the fix").maps_url(),
        "https://www.google.com/maps?q=7.539487,8.514175"
    );

    // The form kept the address and cleared the rest
    let after = form.snapshot();
    assert_eq!(after.address, "5 River Rd");
    assert_eq!(after.waste_type, None);
    assert_eq!(after.location, None);
    assert!(after.success);

    world.auth.shutdown();
}

#[tokio::test]
async fn test_seeded_history_is_ordered_newest_first() {
    let world = seeded_world().await;
    let history = RequestHistory::new(world.auth.clone(), world.requests.clone());

    let entries = history.load().await.expect("Should load history");
    assert_eq!(entries.len(), 2);
    // Oct 8 pending pickup before the Oct 1 completed one
    assert_eq!(entries[0].waste_type, WasteType::Organic);
    assert_eq!(entries[0].status, RequestStatus::Pending);
    assert_eq!(entries[1].waste_type, WasteType::Recyclable);
    assert_eq!(entries[1].status, RequestStatus::Completed);
    assert!(entries[0].created_at > entries[1].created_at);

    world.auth.shutdown();
}

#[tokio::test]
async fn test_live_feed_follows_a_submission() {
    let world = seeded_world().await;
    let form = request_form(&world);
    let history = RequestHistory::new(world.auth.clone(), world.requests.clone());

    let mut feed = history.subscribe().await.expect("Should subscribe");
    assert_eq!(feed.borrow_and_update().len(), 2);

    form.set_waste_type(WasteType::Electronic);
    form.submit().await.expect("Should submit");

    feed.changed().await.expect("Should see the append");
    let entries = feed.borrow().clone();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].waste_type, WasteType::Electronic);

    history.release();
    world.auth.shutdown();
}

#[tokio::test]
async fn test_sign_out_locks_the_app_again() {
    let world = seeded_world().await;
    let history = RequestHistory::new(world.auth.clone(), world.requests.clone());

    world.auth.sign_out().await.expect("Should sign out");

    let state = world.auth.state();
    assert!(!state.is_authenticated());
    assert!(!state.has_profile());
    assert_eq!(
        RouteGate::resolve(&state, Route::Dashboard),
        Some(Route::Login)
    );
    assert!(
        history.load().await.expect_err("Should be locked").is_auth(),
        "history reads require a session"
    );

    world.auth.shutdown();
}

#[tokio::test]
async fn test_profile_survives_sign_out_and_back_in() {
    let world = seeded_world().await;

    world.auth.sign_out().await.expect("Should sign out");
    world.auth.sign_in().await.expect("Should sign back in");

    let state = world.auth.state();
    assert!(state.has_profile(), "profile store was never cleared");
    assert_eq!(
        RouteGate::resolve(&state, Route::Dashboard),
        Some(Route::Dashboard)
    );

    world.auth.shutdown();
}
