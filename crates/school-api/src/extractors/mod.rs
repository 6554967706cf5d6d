//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, and CSV uploads.

mod auth;
mod path;
mod upload;
mod validated;

pub use auth::{AuthUser, SchoolAdminUser};
pub use path::{UploadPath, UserIdPath};
pub use upload::CsvUpload;
pub use validated::ValidatedJson;
