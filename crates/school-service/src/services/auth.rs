//! Authentication service
//!
//! Handles registration, login, token refresh, and bearer token resolution.

use school_common::AppError;
use school_core::entities::User;
use school_core::value_objects::UserId;
use tracing::{info, instrument, warn};

use crate::dto::{AuthResponse, LoginRequest, RefreshTokenRequest, RegisterRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a role-less user
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<UserResponse> {
        let email = request.email.trim().to_lowercase();

        if self.ctx.user_repo().email_exists(&email).await? {
            warn!("Registration rejected: email already registered");
            return Err(ServiceError::conflict("Email already registered"));
        }

        let password_hash = self.ctx.hash_credential(request.password_hash).await?;

        let user = User::new(
            UserId::generate(),
            request.school_name,
            request.forename,
            request.surname,
            email,
            password_hash,
        )?;

        self.ctx.user_repo().create(&user).await?;

        info!(user_id = %user.id, "User registered successfully");

        Ok(UserResponse::from(&user))
    }

    /// Login with email and client credential
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        if !self
            .ctx
            .verify_credential(request.password_hash, user.password_hash.clone())
            .await?
        {
            warn!(user_id = %user.id, "Login failed: invalid credential");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        info!(user_id = %user.id, "User logged in successfully");

        self.issue_tokens(&user)
    }

    /// Exchange a refresh token for a new token pair
    #[instrument(skip(self, request))]
    pub async fn refresh_tokens(
        &self,
        request: RefreshTokenRequest,
    ) -> ServiceResult<AuthResponse> {
        let claims = self
            .ctx
            .jwt_service()
            .validate_refresh_token(&request.refresh_token)?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(claims.user_id()?)
            .await?
            .ok_or(ServiceError::App(AppError::InvalidToken))?;

        info!(user_id = %user.id, "Tokens refreshed");

        self.issue_tokens(&user)
    }

    /// Map a bearer access token back to its user
    #[instrument(skip(self, token))]
    pub async fn resolve_token(&self, token: &str) -> ServiceResult<User> {
        let claims = self.ctx.jwt_service().validate_access_token(token)?;
        let user_id = claims.user_id()?;

        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user_id, "Token for unknown user");
                ServiceError::App(AppError::InvalidToken)
            })
    }

    /// Require the caller to hold the SchoolAdmin role
    pub fn ensure_school_admin(&self, caller: &User) -> ServiceResult<()> {
        if caller.is_school_admin() {
            Ok(())
        } else {
            warn!(user_id = %caller.id, "Caller is not a school admin");
            Err(ServiceError::App(AppError::InsufficientPermissions))
        }
    }

    fn issue_tokens(&self, user: &User) -> ServiceResult<AuthResponse> {
        let token_pair = self.ctx.jwt_service().generate_token_pair(user.id)?;

        Ok(AuthResponse::new(
            token_pair.access_token,
            token_pair.refresh_token,
            token_pair.expires_in,
            UserResponse::from(user),
        ))
    }
}
