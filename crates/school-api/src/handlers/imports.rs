//! Bulk import handler

use axum::{
    extract::{Path, State},
    Json,
};
use school_service::dto::ImportResponse;
use school_service::services::import::parse_role;
use school_service::services::upload::store_upload;
use school_service::ServiceError;
use tracing::info;

use crate::extractors::{CsvUpload, SchoolAdminUser, UploadPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// Import staff, teacher or student records from an uploaded CSV
///
/// POST /upload-school-data/{school_id}/{role}
///
/// Rows naming a school other than the admin's are rejected with 403.
pub async fn upload_school_data(
    State(state): State<AppState>,
    SchoolAdminUser(admin): SchoolAdminUser,
    Path(path): Path<UploadPath>,
    upload: CsvUpload,
) -> ApiResult<Json<ImportResponse>> {
    let role = parse_role(&path.role).map_err(ServiceError::from)?;

    let stored = store_upload(&state.storage().data_upload_dir, &upload.filename, &upload.data).await?;

    info!(
        user_id = %admin.user_id(),
        school_id = %path.school_id,
        role = %role,
        file = %stored.display(),
        "Import file stored"
    );

    let summary = state
        .imports()
        .import_file(&stored, role, &admin.user.school_name)
        .await?;

    Ok(Json(ImportResponse::new(
        path.school_id,
        summary.role.as_str(),
        summary.imported,
    )))
}
