//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::UserId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Invalid gender: {0:?} (expected one of M, F, NB, O)")]
    InvalidGender(String),

    #[error("Unknown role label: {0:?} (expected staff, teacher or student)")]
    UnknownRole(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Caller is not a school admin")]
    NotSchoolAdmin,

    #[error("User belongs to a different school")]
    DifferentSchool,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("User already has a role")]
    AlreadyHasRole,

    #[error("School already has an admin")]
    SchoolAlreadyHasAdmin,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Account store unavailable: {0}")]
    StoreUnavailable(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "UNKNOWN_USER",

            Self::MissingField(_) => "MISSING_FIELD",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidGender(_) => "INVALID_GENDER",
            Self::UnknownRole(_) => "UNKNOWN_ROLE",

            Self::NotSchoolAdmin => "NOT_SCHOOL_ADMIN",
            Self::DifferentSchool => "DIFFERENT_SCHOOL",

            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::AlreadyHasRole => "ALREADY_HAS_ROLE",
            Self::SchoolAlreadyHasAdmin => "SCHOOL_ALREADY_HAS_ADMIN",

            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::StoreUnavailable(_) => "STORE_UNAVAILABLE",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingField(_) | Self::InvalidEmail | Self::InvalidGender(_) | Self::UnknownRole(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotSchoolAdmin | Self::DifferentSchool)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::EmailAlreadyExists | Self::AlreadyHasRole | Self::SchoolAlreadyHasAdmin
        )
    }

    /// Check if the failure is transient (worth retrying later)
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_))
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        if self.is_not_found() {
            404
        } else if self.is_authorization() {
            403
        } else if self.is_validation() {
            400
        } else if self.is_conflict() {
            409
        } else if self.is_transient() {
            503
        } else {
            500
        }
    }
}
