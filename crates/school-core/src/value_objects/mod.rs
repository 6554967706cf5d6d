//! Value objects - immutable types that represent domain concepts

mod import_role;
mod user_id;

pub use import_role::ImportRole;
pub use user_id::{UserId, UserIdParseError};
