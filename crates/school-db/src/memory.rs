//! In-process implementation of UserRepository
//!
//! Backs the service and API tests, and local runs without PostgreSQL.
//! Same contract as [`crate::PgUserRepository`]: case-insensitive unique
//! emails, role payload replaced wholesale on update.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use school_core::entities::User;
use school_core::error::DomainError;
use school_core::traits::{RepoResult, UserRepository};
use school_core::value_objects::UserId;

#[derive(Default)]
struct Tables {
    users: HashMap<UserId, User>,
    /// lowercase email -> id
    emails: HashMap<String, UserId>,
}

/// HashMap-backed account store
#[derive(Default)]
pub struct MemoryUserRepository {
    tables: RwLock<Tables>,
    unavailable: AtomicBool,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with `StoreUnavailable` (or recover)
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.tables.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn check_available(&self) -> RepoResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::StoreUnavailable(
                "memory store marked unavailable".to_string(),
            ));
        }
        Ok(())
    }
}

fn email_key(email: &str) -> String {
    email.trim().to_lowercase()
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        self.check_available()?;
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        self.check_available()?;
        let tables = self.tables.read().await;
        Ok(tables
            .emails
            .get(&email_key(email))
            .and_then(|id| tables.users.get(id))
            .cloned())
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        self.check_available()?;
        Ok(self
            .tables
            .read()
            .await
            .emails
            .contains_key(&email_key(email)))
    }

    async fn school_has_admin(&self, school_name: &str) -> RepoResult<bool> {
        self.check_available()?;
        let school_name = school_name.trim();
        Ok(self.tables.read().await.users.values().any(|user| {
            user.is_school_admin() && user.school_name.eq_ignore_ascii_case(school_name)
        }))
    }

    async fn create(&self, user: &User) -> RepoResult<()> {
        self.check_available()?;
        let mut tables = self.tables.write().await;
        let key = email_key(&user.email);
        if tables.emails.contains_key(&key) || tables.users.contains_key(&user.id) {
            return Err(DomainError::EmailAlreadyExists);
        }
        tables.emails.insert(key, user.id);
        tables.users.insert(user.id, user.clone());
        Ok(())
    }

    async fn update_role(&self, user: &User) -> RepoResult<()> {
        self.check_available()?;
        let mut tables = self.tables.write().await;
        match tables.users.get_mut(&user.id) {
            Some(stored) => {
                stored.role = user.role.clone();
                Ok(())
            }
            None => Err(DomainError::UserNotFound(user.id)),
        }
    }

    async fn ping(&self) -> RepoResult<()> {
        self.check_available()
    }
}
