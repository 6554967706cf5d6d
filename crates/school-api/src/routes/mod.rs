//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use std::time::Duration;

use axum::{extract::DefaultBodyLimit, http::StatusCode, routing::get, routing::post, Router};
use school_common::StorageConfig;
use tower_http::timeout::TimeoutLayer;

use crate::handlers::{auth, health, imports, users};
use crate::state::AppState;

/// Timeout for the account routes
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Create the main API router with all routes (excluding health for separate middleware handling)
///
/// The import route takes its body limit and timeout from `storage`; every other
/// route answers within [`REQUEST_TIMEOUT`].
pub fn create_router(storage: &StorageConfig) -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes(storage))
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes(storage: &StorageConfig) -> Router<AppState> {
    Router::new()
        .merge(
            auth_routes()
                .merge(user_routes())
                .layer(timeout(REQUEST_TIMEOUT)),
        )
        .merge(import_routes(storage))
}

fn timeout(duration: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::SERVICE_UNAVAILABLE, duration)
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/@me", get(users::get_current_user))
        .route("/users/@me/school-admin", post(users::claim_school_admin))
        .route("/users/:user_id/school-admin", post(users::assign_school_admin))
}

/// Bulk import routes
fn import_routes(storage: &StorageConfig) -> Router<AppState> {
    Router::new()
        .route(
            "/upload-school-data/:school_id/:role",
            post(imports::upload_school_data),
        )
        .layer(DefaultBodyLimit::max(storage.max_file_size_bytes()))
        .layer(timeout(storage.import_timeout()))
}
