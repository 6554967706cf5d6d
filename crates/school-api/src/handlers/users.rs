//! User handlers
//!
//! Current-user profile and school admin assignment.

use axum::{
    extract::{Path, State},
    Json,
};
use school_service::dto::{AssignSchoolAdminRequest, CurrentUserResponse, UserResponse};

use crate::extractors::{AuthUser, UserIdPath, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Get current user
///
/// GET /users/@me
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<CurrentUserResponse>> {
    let response = state.users().get_current_user(auth.user_id()).await?;
    Ok(Json(response))
}

/// Claim the SchoolAdmin role for the caller's own school
///
/// POST /users/@me/school-admin
pub async fn claim_school_admin(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<AssignSchoolAdminRequest>,
) -> ApiResult<Json<UserResponse>> {
    let response = state.users().claim_school_admin(&auth.user, request).await?;
    Ok(Json(response))
}

/// Grant the SchoolAdmin role to another user of the caller's school
///
/// POST /users/{user_id}/school-admin
pub async fn assign_school_admin(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<UserIdPath>,
    ValidatedJson(request): ValidatedJson<AssignSchoolAdminRequest>,
) -> ApiResult<Json<UserResponse>> {
    let target_id = path.user_id()?;
    let response = state
        .users()
        .assign_school_admin(&auth.user, target_id, request)
        .await?;
    Ok(Json(response))
}
