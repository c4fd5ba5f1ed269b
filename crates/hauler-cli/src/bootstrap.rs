//! Service wiring.
//!
//! Builds the full port set for whichever backend the config and flags
//! select, and starts the session context on top of it.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use hauler_application::AuthContext;
use hauler_core::media::{CameraDevice, GeolocationService};
use hauler_core::profile::ProfileRepository;
use hauler_core::provider::ProviderDirectory;
use hauler_core::request::{GeoPoint, RequestRepository};
use hauler_infrastructure::{
    AppConfig, BackendClient, BackendKind, FixedGeolocation, HaulerPaths, HttpIdentityProvider,
    HttpProfileRepository, HttpProviderDirectory, HttpRequestRepository, InMemoryIdentityProvider,
    InMemoryProfileRepository, InMemoryProviderDirectory, InMemoryRequestRepository,
    StaticImageCamera, seed,
};

use crate::Cli;

/// Everything the shell needs, wired for one backend.
pub struct Services {
    pub auth: Arc<AuthContext>,
    pub profiles: Arc<dyn ProfileRepository>,
    pub directory: Arc<dyn ProviderDirectory>,
    pub requests: Arc<dyn RequestRepository>,
    pub camera: Arc<dyn CameraDevice>,
    pub locator: Arc<dyn GeolocationService>,
}

pub async fn build(cli: &Cli) -> Result<Services> {
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => HaulerPaths::config_file()?,
    };
    let mut config = AppConfig::load_or_default(&config_path)?;

    if let Some(backend) = cli.backend {
        config.backend = backend.into();
    }
    if let Some(base_url) = &cli.base_url {
        config.remote.base_url = base_url.clone();
    }
    if let Some(api_key) = &cli.api_key {
        config.remote.api_key = Some(api_key.clone());
    }

    match config.backend {
        BackendKind::Memory => {
            tracing::info!("[bootstrap] using the in-memory backend (fresh: {})", cli.fresh);
            Ok(memory_services(cli.fresh))
        }
        BackendKind::Remote => {
            tracing::info!("[bootstrap] using the remote backend at {}", config.remote.base_url);
            Ok(remote_services(&config))
        }
    }
}

/// Demo coordinates: Lafia, Nasarawa State.
fn demo_point() -> GeoPoint {
    GeoPoint::new(7.539487, 8.514175)
}

fn memory_services(fresh: bool) -> Services {
    let identity = Arc::new(InMemoryIdentityProvider::signed_out(seed::demo_account()));
    let (profiles, requests): (Arc<dyn ProfileRepository>, Arc<dyn RequestRepository>) = if fresh {
        (
            Arc::new(InMemoryProfileRepository::new()),
            Arc::new(InMemoryRequestRepository::new()),
        )
    } else {
        (
            Arc::new(InMemoryProfileRepository::with_seed(seed::demo_profile())),
            Arc::new(InMemoryRequestRepository::with_seed(seed::demo_requests())),
        )
    };
    let auth = AuthContext::start(identity, profiles.clone());

    Services {
        auth,
        profiles,
        directory: Arc::new(InMemoryProviderDirectory::new(seed::demo_providers())),
        requests,
        camera: Arc::new(StaticImageCamera::new(seed::demo_frame())),
        locator: Arc::new(
            FixedGeolocation::new(demo_point()).with_delay(Duration::from_millis(300)),
        ),
    }
}

fn remote_services(config: &AppConfig) -> Services {
    let client = Arc::new(BackendClient::new(
        &config.remote.base_url,
        config.remote.api_key.clone(),
    ));
    let identity = Arc::new(HttpIdentityProvider::new(client.clone()));
    let profiles: Arc<dyn ProfileRepository> = Arc::new(HttpProfileRepository::new(client.clone()));
    let auth = AuthContext::start(identity, profiles.clone());

    // Camera and location stay local devices even against a remote store
    Services {
        auth,
        profiles,
        directory: Arc::new(HttpProviderDirectory::new(client.clone())),
        requests: Arc::new(HttpRequestRepository::new(client)),
        camera: Arc::new(StaticImageCamera::new(seed::demo_frame())),
        locator: Arc::new(FixedGeolocation::new(demo_point())),
    }
}
