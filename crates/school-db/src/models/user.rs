//! User database model

use chrono::{DateTime, Utc};
use school_core::entities::RolePayload;
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: Uuid,
    pub school_name: String,
    pub forename: String,
    pub surname: String,
    pub email: String,
    pub password_hash: String,
    pub role: Json<RolePayload>,
    pub created_at: DateTime<Utc>,
}

impl UserModel {
    /// Value of the generated `role_kind` column for this row
    pub fn role_kind(&self) -> &'static str {
        self.role.0.kind().map_or("none", |kind| kind.as_str())
    }
}
