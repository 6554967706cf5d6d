//! Repository implementations
//!
//! PostgreSQL implementation of the account store port defined in school-core.

mod error;
mod user;

pub use user::PgUserRepository;
