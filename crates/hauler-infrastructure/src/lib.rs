pub mod config;
pub mod device;
pub mod memory;
pub mod paths;
pub mod remote;
pub mod seed;

pub use crate::config::{AppConfig, BackendKind, RemoteConfig};
pub use crate::device::{DeniedGeolocation, FixedGeolocation, StaticImageCamera, UnavailableCamera};
pub use crate::memory::{
    InMemoryIdentityProvider, InMemoryProfileRepository, InMemoryProviderDirectory,
    InMemoryRequestRepository,
};
pub use crate::paths::HaulerPaths;
pub use crate::remote::{
    BackendClient, HttpIdentityProvider, HttpProfileRepository, HttpProviderDirectory,
    HttpRequestRepository,
};
