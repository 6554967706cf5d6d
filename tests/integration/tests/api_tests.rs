//! API Integration Tests
//!
//! Each test spawns the full HTTP stack on an ephemeral port, backed by the
//! in-process account store, so no external services are needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_error, assert_json, assert_status, fixtures::*, TestServer, MAX_IMPORT_ROWS,
};
use reqwest::StatusCode;
use school_core::entities::{Gender, Staff};
use school_core::UserRepository;

/// Register a fresh user and return the request and an access token
async fn register_and_login(server: &TestServer) -> (RegisterRequest, String) {
    let request = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post("/api/v1/auth/login", &LoginRequest::from_register(&request))
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    (request, auth.access_token)
}

/// Register a user and make them the admin of their school
async fn school_admin(server: &TestServer) -> String {
    let (_, token) = register_and_login(server).await;
    let response = server
        .post_auth(
            "/api/v1/users/@me/school-admin",
            &token,
            &SchoolAdminRequest::new("head"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
    token
}

fn upload_path(role: &str) -> String {
    format!("/api/v1/upload-school-data/uckfield/{role}")
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready_store_down() {
    let server = TestServer::start().await.expect("Failed to start server");
    server.store.set_unavailable(true);
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::SERVICE_UNAVAILABLE)
        .await
        .unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let body: RegisterResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(body.message, "User Registered");
    assert_eq!(body.user.email, request.email);
    assert_eq!(body.user.school_name, SCHOOL);
    assert_eq!(body.user.role["kind"], "none");

    let stored = server.store.find_by_email(&request.email).await.unwrap().unwrap();
    assert_ne!(stored.password_hash, request.password_hash);
}

#[tokio::test]
async fn test_register_missing_field() {
    let server = TestServer::start().await.expect("Failed to start server");
    let body = serde_json::json!({
        "schoolName": SCHOOL,
        "forename": "Alex",
        "email": "nosurname@example.com",
        "passwordHash": "abc",
    });

    let response = server.post("/api/v1/auth/register", &body).await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "VALIDATION_ERROR");
    assert!(server.store.is_empty().await);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    server.post("/api/v1/auth/register", &request).await.unwrap();

    let mut again = request.clone();
    again.email = request.email.to_uppercase();
    let response = server.post("/api/v1/auth/register", &again).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(server.store.len().await, 1);
}

#[tokio::test]
async fn test_login() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();
    server.post("/api/v1/auth/register", &request).await.unwrap();

    let response = server
        .post("/api/v1/auth/login", &LoginRequest::from_register(&request))
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.token_type, "Bearer");
    assert!(!auth.access_token.is_empty());
    assert!(!auth.refresh_token.is_empty());
    assert_eq!(auth.user.email, request.email);
}

#[tokio::test]
async fn test_login_wrong_credential() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();
    server.post("/api/v1/auth/register", &request).await.unwrap();

    let login = LoginRequest {
        email: request.email.clone(),
        password_hash: "wrong".to_string(),
    };
    let response = server.post("/api/v1/auth/login", &login).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_login_unknown_email() {
    let server = TestServer::start().await.expect("Failed to start server");
    let login = LoginRequest {
        email: "nobody@example.com".to_string(),
        password_hash: "whatever".to_string(),
    };
    let response = server.post("/api/v1/auth/login", &login).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_refresh_token() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();
    server.post("/api/v1/auth/register", &request).await.unwrap();
    let response = server
        .post("/api/v1/auth/login", &LoginRequest::from_register(&request))
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let body = serde_json::json!({ "refresh_token": auth.refresh_token });
    let response = server.post("/api/v1/auth/refresh", &body).await.unwrap();
    let refreshed: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(refreshed.user.id, auth.user.id);
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_get_current_user() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (request, token) = register_and_login(&server).await;

    let response = server.get_auth("/api/v1/users/@me", &token).await.unwrap();
    let me: CurrentUserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(me.greeting, format!("Hello {}", request.forename));
    assert_eq!(me.user.forename, request.forename);
}

#[tokio::test]
async fn test_get_current_user_without_token() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/users/@me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_claim_school_admin_once_per_school() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (_, first) = register_and_login(&server).await;
    let (_, second) = register_and_login(&server).await;

    let response = server
        .post_auth(
            "/api/v1/users/@me/school-admin",
            &first,
            &SchoolAdminRequest::new("head"),
        )
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(user.role["kind"], "school_admin");
    assert_eq!(user.role["username"], "head");

    let response = server
        .post_auth(
            "/api/v1/users/@me/school-admin",
            &second,
            &SchoolAdminRequest::new("deputy"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_assign_school_admin() {
    let server = TestServer::start().await.expect("Failed to start server");
    let admin = school_admin(&server).await;
    let (colleague, _) = register_and_login(&server).await;
    let target = server
        .store
        .find_by_email(&colleague.email)
        .await
        .unwrap()
        .unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/users/{}/school-admin", target.id),
            &admin,
            &SchoolAdminRequest::new("deputy"),
        )
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(user.role["kind"], "school_admin");
}

#[tokio::test]
async fn test_assign_school_admin_requires_admin() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (_, caller) = register_and_login(&server).await;
    let (colleague, _) = register_and_login(&server).await;
    let target = server
        .store
        .find_by_email(&colleague.email)
        .await
        .unwrap()
        .unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/users/{}/school-admin", target.id),
            &caller,
            &SchoolAdminRequest::new("deputy"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_assign_school_admin_invalid_id() {
    let server = TestServer::start().await.expect("Failed to start server");
    let admin = school_admin(&server).await;

    let response = server
        .post_auth(
            "/api/v1/users/not-a-uuid/school-admin",
            &admin,
            &SchoolAdminRequest::new("deputy"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Import Tests
// ============================================================================

#[tokio::test]
async fn test_import_single_staff_row() {
    let server = TestServer::start().await.expect("Failed to start server");
    let admin = school_admin(&server).await;
    let before = server.store.len().await;
    let email = unique_email("staff");

    let response = server
        .upload_auth(
            &upload_path("staff"),
            &admin,
            "staff.csv",
            &csv(STAFF_HEADER, &[staff_row(&email)]),
        )
        .await
        .unwrap();
    let body: ImportResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.message, "data uploaded successfully");
    assert_eq!(body.school_id, "uckfield");
    assert_eq!(body.role, "staff");
    assert_eq!(body.imported, 1);
    assert_eq!(server.store.len().await, before + 1);

    let user = server.store.find_by_email(&email).await.unwrap().unwrap();
    assert_eq!(user.school_name, SCHOOL);
    assert_eq!(user.forename, "Sam");
    assert_eq!(user.surname, "Jones");
    assert_eq!(
        user.role.staff(),
        Some(&Staff {
            dob: "1980-02-03".to_string(),
            address: "1 High Street".to_string(),
            postcode: "TN22 1AA".to_string(),
            gender: Gender::Female,
            phone_no: "07700900001".to_string(),
            medical_notes: "None".to_string(),
        })
    );
    assert!(user.role.school_admin().is_none());
    assert!(user.role.teacher().is_none());
    assert!(user.role.student().is_none());

    // The row's credential is stored hashed and accepted at login
    assert_ne!(user.password_hash, "h4sh");
    let login = LoginRequest {
        email,
        password_hash: "h4sh".to_string(),
    };
    let response = server.post("/api/v1/auth/login", &login).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_import_every_row() {
    let server = TestServer::start().await.expect("Failed to start server");
    let admin = school_admin(&server).await;
    let before = server.store.len().await;
    let rows: Vec<String> = (0..3).map(|_| teacher_row(&unique_email("teacher"))).collect();

    let response = server
        .upload_auth(
            &upload_path("teacher"),
            &admin,
            "teachers.csv",
            &csv(TEACHER_HEADER, &rows),
        )
        .await
        .unwrap();
    let body: ImportResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.imported, 3);
    assert_eq!(server.store.len().await, before + 3);
}

#[tokio::test]
async fn test_import_students() {
    let server = TestServer::start().await.expect("Failed to start server");
    let admin = school_admin(&server).await;
    let email = unique_email("student");

    let response = server
        .upload_auth(
            &upload_path("student"),
            &admin,
            "students.csv",
            &csv(STUDENT_HEADER, &[student_row(&email)]),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let user = server.store.find_by_email(&email).await.unwrap().unwrap();
    let student = user.role.student().unwrap();
    assert_eq!(student.upn, "A123456789012");
    assert_eq!(student.form, "9R");
}

#[tokio::test]
async fn test_import_unknown_role() {
    let server = TestServer::start().await.expect("Failed to start server");
    let admin = school_admin(&server).await;
    let before = server.store.len().await;

    let response = server
        .upload_auth(
            &upload_path("principal"),
            &admin,
            "staff.csv",
            &csv(STAFF_HEADER, &[staff_row(&unique_email("staff"))]),
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(code, "UNKNOWN_ROLE");
    assert_eq!(server.store.len().await, before);
}

#[tokio::test]
async fn test_import_requires_school_admin() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = register_and_login(&server).await;
    let before = server.store.len().await;

    let response = server
        .upload_auth(
            &upload_path("staff"),
            &token,
            "staff.csv",
            &csv(STAFF_HEADER, &[staff_row(&unique_email("staff"))]),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(server.store.len().await, before);
}

#[tokio::test]
async fn test_import_requires_school_admin_before_file_checks() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = register_and_login(&server).await;

    let response = server
        .upload_auth(&upload_path("staff"), &token, "data.exe", "MZ")
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "INSUFFICIENT_PERMISSIONS");
}

#[tokio::test]
async fn test_import_requires_auth() {
    let server = TestServer::start().await.expect("Failed to start server");
    let url = format!("{}{}", server.base_url(), upload_path("staff"));
    let response = server.client.post(&url).send().await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_import_rejects_non_csv_file() {
    let server = TestServer::start().await.expect("Failed to start server");
    let admin = school_admin(&server).await;
    let before = server.store.len().await;

    let response = server
        .upload_auth(
            &upload_path("staff"),
            &admin,
            "data.exe",
            &csv(STAFF_HEADER, &[staff_row(&unique_email("staff"))]),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(server.store.len().await, before);
}

#[tokio::test]
async fn test_import_malformed_row_persists_nothing() {
    let server = TestServer::start().await.expect("Failed to start server");
    let admin = school_admin(&server).await;
    let before = server.store.len().await;
    let good = staff_row(&unique_email("staff"));
    let bad = staff_row(&unique_email("staff")).replace(",F,", ",Q,");

    let response = server
        .upload_auth(
            &upload_path("staff"),
            &admin,
            "staff.csv",
            &csv(STAFF_HEADER, &[good, bad]),
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();

    assert_eq!(code, "IMPORT_FAILED");
    assert_eq!(server.store.len().await, before);
}

#[tokio::test]
async fn test_import_missing_column() {
    let server = TestServer::start().await.expect("Failed to start server");
    let admin = school_admin(&server).await;

    let response = server
        .upload_auth(
            &upload_path("teacher"),
            &admin,
            "teachers.csv",
            &csv(STAFF_HEADER, &[staff_row(&unique_email("staff"))]),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_import_existing_email() {
    let server = TestServer::start().await.expect("Failed to start server");
    let admin = school_admin(&server).await;
    let (existing, _) = register_and_login(&server).await;
    let before = server.store.len().await;

    let response = server
        .upload_auth(
            &upload_path("staff"),
            &admin,
            "staff.csv",
            &csv(
                STAFF_HEADER,
                &[staff_row(&unique_email("staff")), staff_row(&existing.email)],
            ),
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();

    assert_eq!(code, "EMAIL_ALREADY_EXISTS");
    assert_eq!(server.store.len().await, before);
}

#[tokio::test]
async fn test_import_rejects_other_school() {
    let server = TestServer::start().await.expect("Failed to start server");
    let admin = school_admin(&server).await;
    let before = server.store.len().await;
    let foreign = staff_row(&unique_email("staff")).replacen(SCHOOL, "Ringmer Academy", 1);

    let response = server
        .upload_auth(
            &upload_path("staff"),
            &admin,
            "staff.csv",
            &csv(STAFF_HEADER, &[staff_row(&unique_email("staff")), foreign]),
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();

    assert_eq!(code, "FOREIGN_SCHOOL");
    assert_eq!(server.store.len().await, before);
}

#[tokio::test]
async fn test_import_row_limit() {
    let server = TestServer::start().await.expect("Failed to start server");
    let admin = school_admin(&server).await;
    let before = server.store.len().await;
    let rows: Vec<String> = (0..=MAX_IMPORT_ROWS)
        .map(|_| staff_row(&unique_email("staff")))
        .collect();

    let response = server
        .upload_auth(
            &upload_path("staff"),
            &admin,
            "staff.csv",
            &csv(STAFF_HEADER, &rows),
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::PAYLOAD_TOO_LARGE)
        .await
        .unwrap();

    assert_eq!(code, "TOO_MANY_ROWS");
    assert_eq!(server.store.len().await, before);
}
