//! User service
//!
//! Current-user lookup and the `None -> SchoolAdmin` role transition.

use school_core::entities::User;
use school_core::error::DomainError;
use school_core::value_objects::UserId;
use tracing::{info, instrument, warn};

use crate::dto::{AssignSchoolAdminRequest, CurrentUserResponse, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get user entity by ID
    #[instrument(skip(self))]
    pub async fn get_user_entity(&self, user_id: UserId) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))
    }

    /// Get current authenticated user (full profile with greeting)
    #[instrument(skip(self))]
    pub async fn get_current_user(&self, user_id: UserId) -> ServiceResult<CurrentUserResponse> {
        let user = self.get_user_entity(user_id).await?;
        Ok(CurrentUserResponse::from(&user))
    }

    /// The caller becomes the first SchoolAdmin of their own school
    #[instrument(skip(self, caller, request), fields(user_id = %caller.id))]
    pub async fn claim_school_admin(
        &self,
        caller: &User,
        request: AssignSchoolAdminRequest,
    ) -> ServiceResult<UserResponse> {
        if !caller.role.is_none() {
            return Err(DomainError::AlreadyHasRole.into());
        }
        if self
            .ctx
            .user_repo()
            .school_has_admin(&caller.school_name)
            .await?
        {
            warn!(school = %caller.school_name, "School claim rejected: admin exists");
            return Err(DomainError::SchoolAlreadyHasAdmin.into());
        }

        let mut user = caller.clone();
        user.assign_school_admin(request.username)?;
        self.ctx.user_repo().update_role(&user).await?;

        info!(school = %user.school_name, "School claimed");
        Ok(UserResponse::from(&user))
    }

    /// An existing SchoolAdmin grants the role to a role-less user of the same school
    #[instrument(skip(self, caller, request), fields(caller_id = %caller.id))]
    pub async fn assign_school_admin(
        &self,
        caller: &User,
        target_id: UserId,
        request: AssignSchoolAdminRequest,
    ) -> ServiceResult<UserResponse> {
        if !caller.is_school_admin() {
            return Err(DomainError::NotSchoolAdmin.into());
        }

        let mut target = self
            .ctx
            .user_repo()
            .find_by_id(target_id)
            .await?
            .ok_or(DomainError::UserNotFound(target_id))?;

        if !caller.same_school(&target) {
            warn!(target_id = %target_id, "Admin assignment rejected: different school");
            return Err(DomainError::DifferentSchool.into());
        }

        target.assign_school_admin(request.username)?;
        self.ctx.user_repo().update_role(&target).await?;

        info!(target_id = %target_id, "School admin assigned");
        Ok(UserResponse::from(&target))
    }
}
