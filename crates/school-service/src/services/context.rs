//! Service context - dependency container for services
//!
//! Holds the account store handle, token and credential services, and the
//! upload storage settings. Passed explicitly to every service; there is no
//! process-wide connection.

use std::sync::Arc;

use school_common::auth::{JwtService, PasswordService};
use school_common::config::StorageConfig;
use school_core::traits::UserRepository;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,

    // Services
    jwt_service: Arc<JwtService>,
    password_service: PasswordService,

    // Storage
    storage: StorageConfig,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        jwt_service: Arc<JwtService>,
        storage: StorageConfig,
    ) -> Self {
        Self {
            user_repo,
            jwt_service,
            password_service: PasswordService::new(),
            storage,
        }
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the credential hashing service
    pub fn password_service(&self) -> &PasswordService {
        &self.password_service
    }

    /// Argon2-hash a credential on the blocking pool
    pub async fn hash_credential(&self, credential: String) -> ServiceResult<String> {
        let service = self.password_service.clone();
        let hash = tokio::task::spawn_blocking(move || service.hash(&credential))
            .await
            .map_err(|e| ServiceError::internal(format!("credential hashing task failed: {e}")))??;
        Ok(hash)
    }

    /// Check a credential against a stored hash on the blocking pool
    pub async fn verify_credential(&self, credential: String, hash: String) -> ServiceResult<bool> {
        let service = self.password_service.clone();
        let matched = tokio::task::spawn_blocking(move || service.verify(&credential, &hash))
            .await
            .map_err(|e| ServiceError::internal(format!("credential check task failed: {e}")))??;
        Ok(matched)
    }

    // === Storage ===

    pub fn storage(&self) -> &StorageConfig {
        &self.storage
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("user_repo", &"dyn UserRepository")
            .field("storage", &self.storage)
            .finish_non_exhaustive()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    storage: Option<StorageConfig>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            user_repo: None,
            jwt_service: None,
            storage: None,
        }
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn storage(mut self, storage: StorageConfig) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Build the ServiceContext
    ///
    /// Storage falls back to `StorageConfig::default()`.
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.storage.unwrap_or_default(),
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
