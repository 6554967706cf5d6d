//! Domain entities - core business objects

mod role;
mod user;

pub use role::{Gender, RoleKind, RolePayload, SchoolAdmin, Staff, Student, Teacher};
pub use user::User;

use crate::error::DomainError;

/// Reject a required text field that is empty or whitespace-only
pub(crate) fn require(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        Err(DomainError::MissingField(field))
    } else {
        Ok(())
    }
}
