//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Credentials are
//! never part of a response.

use chrono::{DateTime, Utc};
use serde::Serialize;

use school_core::entities::RolePayload;

// ============================================================================
// User Responses
// ============================================================================

/// User record as exposed by the API
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub school_name: String,
    pub forename: String,
    pub surname: String,
    pub email: String,
    /// Tagged role payload, `{"kind":"none"}` for role-less users
    pub role: RolePayload,
    pub created_at: DateTime<Utc>,
}

/// Current user with greeting
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub greeting: String,
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with tokens
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

impl AuthResponse {
    pub fn new(
        access_token: String,
        refresh_token: String,
        expires_in: i64,
        user: UserResponse,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

/// Registration acknowledgement
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserResponse,
}

impl RegisterResponse {
    pub fn new(user: UserResponse) -> Self {
        Self {
            message: "User Registered".to_string(),
            user,
        }
    }
}

// ============================================================================
// Import Responses
// ============================================================================

/// Bulk import acknowledgement
#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub message: String,
    pub school_id: String,
    pub role: String,
    pub imported: usize,
}

impl ImportResponse {
    pub fn new(school_id: impl Into<String>, role: impl Into<String>, imported: usize) -> Self {
        Self {
            message: "data uploaded successfully".to_string(),
            school_id: school_id.into(),
            role: role.into(),
            imported,
        }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
