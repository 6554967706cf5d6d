//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs from the account store, and the
//! infrastructure layer provides the implementation.

use async_trait::async_trait;

use crate::entities::User;
use crate::error::DomainError;
use crate::value_objects::UserId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Find user by email (case-insensitive)
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Check whether any user of the school holds the SchoolAdmin role
    async fn school_has_admin(&self, school_name: &str) -> RepoResult<bool>;

    /// Persist a new user
    ///
    /// Fails with `EmailAlreadyExists` if the email is taken.
    async fn create(&self, user: &User) -> RepoResult<()>;

    /// Replace the role payload of an existing user
    async fn update_role(&self, user: &User) -> RepoResult<()>;

    /// Check that the store is reachable
    async fn ping(&self) -> RepoResult<()>;
}
