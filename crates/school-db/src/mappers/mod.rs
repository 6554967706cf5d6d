//! Entity to model mappers
//!
//! - `From<UserModel> for User`: convert database rows to domain objects
//! - `UserInsert`/`RoleUpdate`: prepare entity data for database writes

mod user;

pub use user::{RoleUpdate, UserInsert};
