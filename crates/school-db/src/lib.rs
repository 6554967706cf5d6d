//! # school-db
//!
//! Account store implementing the `UserRepository` port with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management and embedded migrations
//! - Database model with SQLx `FromRow` derive (role payload as JSONB)
//! - Entity ↔ model mappers
//! - `PgUserRepository`, plus `MemoryUserRepository` for tests and local runs
//!
//! ## Usage
//!
//! ```rust,ignore
//! use school_db::{create_pool, run_migrations, DatabaseConfig, PgUserRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::from_env()).await?;
//!     run_migrations(&pool).await?;
//!     let user_repo = PgUserRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::MemoryUserRepository;
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool};
pub use repositories::PgUserRepository;
