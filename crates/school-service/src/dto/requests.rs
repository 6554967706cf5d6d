//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Absent fields deserialize to empty strings so that "missing" and "empty"
//! surface as the same validation failure.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// Self-registration request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 200, message = "schoolName is required"))]
    pub school_name: String,

    #[validate(length(min = 1, max = 100, message = "forename is required"))]
    pub forename: String,

    #[validate(length(min = 1, max = 100, message = "surname is required"))]
    pub surname: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Client-side hashed credential
    #[validate(length(min = 1, max = 512, message = "passwordHash is required"))]
    pub password_hash: String,
}

/// Login request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "passwordHash is required"))]
    pub password_hash: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// Claim or assign the SchoolAdmin role
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct AssignSchoolAdminRequest {
    #[validate(length(min = 1, max = 64, message = "username must be 1-64 characters"))]
    pub username: String,
}
