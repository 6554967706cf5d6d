//! User entity <-> model mapper

use chrono::{DateTime, Utc};
use school_core::entities::{RolePayload, User};
use school_core::value_objects::UserId;
use sqlx::types::Json;
use uuid::Uuid;

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: UserId::from_uuid(model.id),
            school_name: model.school_name,
            forename: model.forename,
            surname: model.surname,
            email: model.email,
            password_hash: model.password_hash,
            role: model.role.0,
            created_at: model.created_at,
        }
    }
}

/// Borrowed column values for inserting a user row
pub struct UserInsert<'a> {
    pub id: Uuid,
    pub school_name: &'a str,
    pub forename: &'a str,
    pub surname: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub role: Json<&'a RolePayload>,
    pub created_at: DateTime<Utc>,
}

impl<'a> UserInsert<'a> {
    pub fn new(user: &'a User) -> Self {
        Self {
            id: user.id.into_inner(),
            school_name: &user.school_name,
            forename: &user.forename,
            surname: &user.surname,
            email: &user.email,
            password_hash: &user.password_hash,
            role: Json(&user.role),
            created_at: user.created_at,
        }
    }
}

/// Column values for replacing a user's role payload
pub struct RoleUpdate<'a> {
    pub id: Uuid,
    pub role: Json<&'a RolePayload>,
}

impl<'a> RoleUpdate<'a> {
    pub fn new(user: &'a User) -> Self {
        Self {
            id: user.id.into_inner(),
            role: Json(&user.role),
        }
    }
}
