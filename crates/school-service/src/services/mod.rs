//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod auth;
pub mod context;
pub mod error;
pub mod import;
pub mod upload;
pub mod user;

// Re-export all services for convenience
pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use import::{ImportError, ImportService, ImportSummary};
pub use upload::{allowed_file, check_csv_upload, check_upload, is_csv, secure_filename, store_upload};
pub use user::UserService;
