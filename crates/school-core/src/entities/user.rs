//! User entity - a school-system account

use chrono::{DateTime, Utc};

use super::require;
use super::role::{RolePayload, SchoolAdmin};
use crate::error::DomainError;
use crate::value_objects::UserId;

/// User entity: core account fields plus at most one role payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub school_name: String,
    pub forename: String,
    pub surname: String,
    pub email: String,
    pub password_hash: String,
    pub role: RolePayload,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a role-less user (self-registration)
    ///
    /// # Errors
    /// Returns `MissingField` if any core field is empty
    pub fn new(
        id: UserId,
        school_name: String,
        forename: String,
        surname: String,
        email: String,
        password_hash: String,
    ) -> Result<Self, DomainError> {
        Self::with_role(
            id,
            school_name,
            forename,
            surname,
            email,
            password_hash,
            RolePayload::None,
        )
    }

    /// Create a user with a role payload attached (bulk import)
    ///
    /// # Errors
    /// Returns `MissingField` if any core or payload field is empty
    pub fn with_role(
        id: UserId,
        school_name: String,
        forename: String,
        surname: String,
        email: String,
        password_hash: String,
        role: RolePayload,
    ) -> Result<Self, DomainError> {
        let user = Self {
            id,
            school_name: school_name.trim().to_string(),
            forename: forename.trim().to_string(),
            surname: surname.trim().to_string(),
            email: email.trim().to_string(),
            password_hash,
            role,
            created_at: Utc::now(),
        };
        user.validate()?;
        Ok(user)
    }

    /// Check presence of all required fields
    pub fn validate(&self) -> Result<(), DomainError> {
        require("schoolName", &self.school_name)?;
        require("forename", &self.forename)?;
        require("surname", &self.surname)?;
        require("email", &self.email)?;
        require("passwordHash", &self.password_hash)?;
        self.role.validate()
    }

    #[inline]
    pub fn is_school_admin(&self) -> bool {
        self.role.is_school_admin()
    }

    /// Whether both users belong to the same school (case-insensitive)
    pub fn same_school(&self, other: &User) -> bool {
        self.school_name.eq_ignore_ascii_case(&other.school_name)
    }

    /// Attach the SchoolAdmin role to a role-less user
    ///
    /// # Errors
    /// Returns `AlreadyHasRole` if a role payload is already attached
    pub fn assign_school_admin(&mut self, username: String) -> Result<(), DomainError> {
        if !self.role.is_none() {
            return Err(DomainError::AlreadyHasRole);
        }
        let admin = SchoolAdmin {
            username: username.trim().to_string(),
        };
        admin.validate()?;
        self.role = RolePayload::SchoolAdmin(admin);
        Ok(())
    }
}
