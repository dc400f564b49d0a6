//! Service context - dependency container for services
//!
//! Holds the stores shared by every bot profile. Messengers are per bot and
//! are handed to the dialog engine by the caller.

use std::sync::Arc;

use bot_core::traits::{RecordRepository, StateStore, UserRepository};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    user_repo: Arc<dyn UserRepository>,
    state_store: Arc<dyn StateStore>,
    record_repo: Arc<dyn RecordRepository>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        state_store: Arc<dyn StateStore>,
        record_repo: Arc<dyn RecordRepository>,
    ) -> Self {
        Self {
            user_repo,
            state_store,
            record_repo,
        }
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the dialog state store
    pub fn state_store(&self) -> &dyn StateStore {
        self.state_store.as_ref()
    }

    /// Get the record repository
    pub fn record_repo(&self) -> &dyn RecordRepository {
        self.record_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    state_store: Option<Arc<dyn StateStore>>,
    record_repo: Option<Arc<dyn RecordRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn state_store(mut self, store: Arc<dyn StateStore>) -> Self {
        self.state_store = Some(store);
        self
    }

    pub fn record_repo(mut self, repo: Arc<dyn RecordRepository>) -> Self {
        self.record_repo = Some(repo);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.state_store
                .ok_or_else(|| ServiceError::validation("state_store is required"))?,
            self.record_repo
                .ok_or_else(|| ServiceError::validation("record_repo is required"))?,
        ))
    }
}
