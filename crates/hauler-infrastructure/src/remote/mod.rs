//! Remote HTTP port implementations.
//!
//! All four ports share one [`BackendClient`]; wiring builds the client
//! once from configuration and hands `Arc` clones to each implementation.

mod client;
mod identity;
mod profiles;
mod providers;
mod requests;

pub use client::BackendClient;
pub use identity::HttpIdentityProvider;
pub use profiles::HttpProfileRepository;
pub use providers::HttpProviderDirectory;
pub use requests::HttpRequestRepository;
