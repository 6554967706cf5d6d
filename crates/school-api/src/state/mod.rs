//! Shared handler state
//!
//! One `ServiceContext` per process; handlers borrow short-lived services from it.

use std::sync::Arc;

use school_common::{AppConfig, StorageConfig};
use school_core::traits::UserRepository;
use school_service::{AuthService, ImportService, ServiceContext, UserService};

#[derive(Clone)]
pub struct AppState {
    service_context: Arc<ServiceContext>,
    config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(service_context: ServiceContext, config: AppConfig) -> Self {
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Account store, for readiness checks
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.service_context.user_repo()
    }

    /// Upload directory and import limits
    pub fn storage(&self) -> &StorageConfig {
        self.service_context.storage()
    }

    pub fn auth(&self) -> AuthService<'_> {
        AuthService::new(&self.service_context)
    }

    pub fn users(&self) -> UserService<'_> {
        UserService::new(&self.service_context)
    }

    pub fn imports(&self) -> ImportService<'_> {
        ImportService::new(&self.service_context)
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("env", &self.config.app.env)
            .field("storage", self.storage())
            .finish_non_exhaustive()
    }
}
