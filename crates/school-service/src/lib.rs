//! # school-service
//!
//! Application layer containing business logic, services, and DTOs:
//! registration and login, school admin assignment, upload intake, and the
//! bulk CSV import pipeline.

pub mod dto;
pub mod services;

pub use services::{
    AuthService, ImportError, ImportService, ImportSummary, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, UserService,
};
