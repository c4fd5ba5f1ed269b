//! Profile setup flow.
//!
//! First-run flow for a signed-in account without a service profile: list
//! the active providers, validate the submitted details, persist the
//! profile, and refresh the session so the route gate moves on.

use std::sync::Arc;

use hauler_core::error::{HaulerError, Result};
use hauler_core::profile::{Profile, ProfileRepository};
use hauler_core::provider::{ProviderDirectory, ServiceProvider};
use tokio::sync::Mutex;

use crate::auth::AuthContext;

/// Details collected by the setup form.
#[derive(Debug, Clone)]
pub struct ProfileForm {
    pub address: String,
    pub phone: String,
    pub service_provider: String,
}

/// What entering the setup route leads to.
#[derive(Debug, Clone)]
pub enum SetupEntry {
    /// A profile already exists; forward to the dashboard.
    AlreadyComplete,
    /// Render the form with these selectable providers.
    Form(Vec<ServiceProvider>),
}

pub struct ProfileSetupFlow {
    auth: Arc<AuthContext>,
    profiles: Arc<dyn ProfileRepository>,
    directory: Arc<dyn ProviderDirectory>,
    providers: Mutex<Option<Vec<ServiceProvider>>>,
}

impl ProfileSetupFlow {
    pub fn new(
        auth: Arc<AuthContext>,
        profiles: Arc<dyn ProfileRepository>,
        directory: Arc<dyn ProviderDirectory>,
    ) -> Self {
        Self {
            auth,
            profiles,
            directory,
            providers: Mutex::new(None),
        }
    }

    /// Enters the setup route. Idempotent: a session that already has a
    /// profile is forwarded without touching the store.
    pub async fn enter(&self) -> Result<SetupEntry> {
        if self.auth.state().has_profile() {
            tracing::debug!("[ProfileSetupFlow] profile already present, forwarding");
            return Ok(SetupEntry::AlreadyComplete);
        }
        Ok(SetupEntry::Form(self.load_providers().await?))
    }

    /// Active providers for the form, fetched once and cached.
    pub async fn load_providers(&self) -> Result<Vec<ServiceProvider>> {
        let mut cache = self.providers.lock().await;
        if let Some(providers) = cache.as_ref() {
            return Ok(providers.clone());
        }
        let providers = self.directory.list_active().await?;
        tracing::debug!("[ProfileSetupFlow] loaded {} active providers", providers.len());
        *cache = Some(providers.clone());
        Ok(providers)
    }

    /// Validates and persists the profile, then refreshes the session.
    ///
    /// Requires a signed-in account. If a profile appeared in the meantime
    /// the call succeeds without writing anything.
    pub async fn submit(&self, form: &ProfileForm) -> Result<()> {
        let state = self.auth.state();
        let Some(ref account) = state.account else {
            return Err(HaulerError::auth("sign in before setting up a profile"));
        };
        if state.has_profile() {
            tracing::debug!("[ProfileSetupFlow] profile already present, submit skipped");
            return Ok(());
        }

        let providers = self.load_providers().await?;
        Self::validate(form, &providers)?;

        let profile = Profile::new(
            account,
            form.address.trim(),
            form.phone.trim(),
            form.service_provider.clone(),
        );
        self.profiles.save(&profile).await?;
        tracing::info!("[ProfileSetupFlow] profile saved for {}", profile.uid);

        self.auth.refresh_profile().await;
        Ok(())
    }

    fn validate(form: &ProfileForm, providers: &[ServiceProvider]) -> Result<()> {
        if form.address.trim().is_empty() {
            return Err(HaulerError::validation("address", "address is required"));
        }
        if form.phone.trim().is_empty() {
            return Err(HaulerError::validation("phone", "phone number is required"));
        }
        if !providers.iter().any(|p| p.name == form.service_provider) {
            return Err(HaulerError::validation(
                "serviceProvider",
                "choose a provider from the list",
            ));
        }
        Ok(())
    }
}
