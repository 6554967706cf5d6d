//! Authentication extractors
//!
//! Resolve the bearer token in the Authorization header to a stored user.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use school_core::entities::User;
use school_core::value_objects::UserId;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user resolved from the JWT access token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: User,
}

impl AuthUser {
    pub fn user_id(&self) -> UserId {
        self.user.id
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);

        let user = app_state
            .auth()
            .resolve_token(bearer.token())
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Bearer token rejected");
                ApiError::from(e)
            })?;

        Ok(AuthUser { user })
    }
}

/// Authenticated user holding the SchoolAdmin role
///
/// Rejects with 403 before the request body is read.
#[derive(Debug, Clone)]
pub struct SchoolAdminUser(pub AuthUser);

#[async_trait]
impl<S> FromRequestParts<S> for SchoolAdminUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth = AuthUser::from_request_parts(parts, state).await?;
        let app_state = AppState::from_ref(state);

        app_state.auth().ensure_school_admin(&auth.user)?;

        Ok(SchoolAdminUser(auth))
    }
}
