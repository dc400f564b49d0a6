//! Application state
//!
//! Holds the shared service context, the configuration and one handle per
//! enabled bot profile.

use std::collections::HashMap;
use std::sync::Arc;

use bot_common::AppConfig;
use bot_core::traits::Messenger;
use bot_service::{BotProfile, ServiceContext};

/// Everything the webhook needs to run one bot
#[derive(Clone)]
pub struct BotHandle {
    pub profile: &'static BotProfile,
    pub messenger: Arc<dyn Messenger>,
}

impl std::fmt::Debug for BotHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotHandle")
            .field("profile", &self.profile.name)
            .finish()
    }
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing all stores
    service_context: Arc<ServiceContext>,
    /// Application configuration
    config: Arc<AppConfig>,
    /// Enabled bots by profile name
    bots: Arc<HashMap<&'static str, BotHandle>>,
}

impl AppState {
    /// Create a new AppState with no bots mounted
    pub fn new(service_context: ServiceContext, config: AppConfig) -> Self {
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
            bots: Arc::new(HashMap::new()),
        }
    }

    /// Mount a bot profile with its own messenger
    pub fn with_bot(mut self, profile: &'static BotProfile, messenger: Arc<dyn Messenger>) -> Self {
        Arc::make_mut(&mut self.bots).insert(profile.name, BotHandle { profile, messenger });
        self
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Look up a mounted bot
    pub fn bot(&self, name: &str) -> Option<&BotHandle> {
        self.bots.get(name)
    }

    /// Names of the mounted bots
    pub fn bot_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.bots.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("config", &"AppConfig")
            .field("bots", &self.bot_names())
            .finish()
    }
}
