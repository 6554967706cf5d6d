//! CSV upload extractor
//!
//! Reads the multipart `file` part of an import request and applies the
//! filename and extension checks.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Multipart, Request},
};
use school_service::services::upload::check_csv_upload;
use school_service::ServiceError;

use crate::response::ApiError;

/// Multipart form field carrying the file
pub const FILE_FIELD: &str = "file";

/// A CSV file taken from the `file` multipart field
#[derive(Debug, Clone)]
pub struct CsvUpload {
    /// Sanitised client filename
    pub filename: String,
    pub data: Bytes,
}

#[async_trait]
impl<S> FromRequest<S> for CsvUpload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|_| ServiceError::validation("no file attached"))?;

        while let Some(field) = multipart.next_field().await? {
            if field.name() != Some(FILE_FIELD) {
                continue;
            }
            let filename = check_csv_upload(field.file_name())?;
            let data = field.bytes().await?;
            return Ok(CsvUpload { filename, data });
        }

        Err(ServiceError::validation("no file attached").into())
    }
}
