//! In-memory port implementations for workshop mode and tests.

mod identity;
mod profiles;
mod providers;
mod requests;

pub use identity::InMemoryIdentityProvider;
pub use profiles::InMemoryProfileRepository;
pub use providers::InMemoryProviderDirectory;
pub use requests::InMemoryRequestRepository;
