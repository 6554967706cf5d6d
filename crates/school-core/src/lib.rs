//! # school-core
//!
//! Domain layer containing the user record model, role payloads, value objects,
//! and the account store port. This crate has zero dependencies on
//! infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Gender, RoleKind, RolePayload, SchoolAdmin, Staff, Student, Teacher, User,
};
pub use error::DomainError;
pub use traits::{RepoResult, UserRepository};
pub use value_objects::{ImportRole, UserId, UserIdParseError};
