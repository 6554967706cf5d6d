//! Credential hashing and verification
//!
//! Clients submit an already-hashed password (`passwordHash`). The server
//! never stores that value directly; it stores an Argon2id hash of it.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::AppError;

/// Hash a client credential using Argon2id
///
/// # Errors
/// Returns an error if hashing fails
pub fn hash_password(credential: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(credential.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))
}

/// Verify a client credential against a stored hash
///
/// # Errors
/// Returns an error if the stored hash is malformed
pub fn verify_password(credential: &str, hash: &str) -> Result<bool, AppError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(credential.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Password service for dependency injection
#[derive(Debug, Clone, Default)]
pub struct PasswordService;

impl PasswordService {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    pub fn hash(&self, credential: &str) -> Result<String, AppError> {
        hash_password(credential)
    }

    pub fn verify(&self, credential: &str, hash: &str) -> Result<bool, AppError> {
        verify_password(credential, hash)
    }
}
