//! Authentication handlers
//!
//! Endpoints for registration, login, and token refresh.

use axum::{extract::State, Json};
use school_service::dto::{
    AuthResponse, LoginRequest, RefreshTokenRequest, RegisterRequest, RegisterResponse,
};

use crate::extractors::ValidatedJson;
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Register a new (role-less) user
///
/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Created<Json<RegisterResponse>>> {
    let user = state.auth().register(request).await?;
    Ok(Created(Json(RegisterResponse::new(user))))
}

/// Login with email and credential
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let response = state.auth().login(request).await?;
    Ok(Json(response))
}

/// Refresh access token
///
/// POST /auth/refresh
pub async fn refresh_token(
    State(state): State<AppState>,
    Json(request): Json<RefreshTokenRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let response = state.auth().refresh_tokens(request).await?;
    Ok(Json(response))
}
