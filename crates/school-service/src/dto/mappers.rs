//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use school_core::entities::User;

use super::responses::{CurrentUserResponse, UserResponse};

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            school_name: user.school_name.clone(),
            forename: user.forename.clone(),
            surname: user.surname.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<&User> for CurrentUserResponse {
    fn from(user: &User) -> Self {
        Self {
            user: UserResponse::from(user),
            greeting: format!("Hello {}", user.forename),
        }
    }
}
