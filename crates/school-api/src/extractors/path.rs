//! Path parameter extractors

use school_core::value_objects::UserId;
use serde::Deserialize;

use crate::response::ApiError;

/// Path parameters with user_id
#[derive(Debug, Deserialize)]
pub struct UserIdPath {
    pub user_id: String,
}

impl UserIdPath {
    /// Parse user_id as UserId
    pub fn user_id(&self) -> Result<UserId, ApiError> {
        self.user_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid user_id format"))
    }
}

/// Path parameters of the import route
#[derive(Debug, Deserialize)]
pub struct UploadPath {
    /// Echoed back; not checked against the caller's school
    pub school_id: String,
    /// Role label, parsed by the import pipeline
    pub role: String,
}
