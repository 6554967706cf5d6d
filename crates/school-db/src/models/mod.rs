//! Database models - SQLx-compatible structs for PostgreSQL tables

mod user;

pub use user::UserModel;
