//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

pub const SCHOOL: &str = "Uckfield College";

/// Registration request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub school_name: String,
    pub forename: String,
    pub surname: String,
    pub email: String,
    pub password_hash: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        Self::at_school(SCHOOL)
    }

    pub fn at_school(school: &str) -> Self {
        let suffix = unique_suffix();
        Self {
            school_name: school.to_string(),
            forename: format!("Alex{suffix}"),
            surname: "Morgan".to_string(),
            email: format!("alex{suffix}@example.com"),
            password_hash: "5f4dcc3b5aa765d61d8327deb882cf99".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password_hash: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password_hash: reg.password_hash.clone(),
        }
    }
}

/// School admin claim/assignment request
#[derive(Debug, Serialize)]
pub struct SchoolAdminRequest {
    pub username: String,
}

impl SchoolAdminRequest {
    pub fn new(username: &str) -> Self {
        Self {
            username: username.to_string(),
        }
    }
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

/// Registration response
#[derive(Debug, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserResponse,
}

/// User response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub school_name: String,
    pub forename: String,
    pub surname: String,
    pub email: String,
    pub role: serde_json::Value,
}

/// Current user response
#[derive(Debug, Deserialize)]
pub struct CurrentUserResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub greeting: String,
}

/// Import response
#[derive(Debug, Deserialize)]
pub struct ImportResponse {
    pub message: String,
    pub school_id: String,
    pub role: String,
    pub imported: usize,
}

pub const STAFF_HEADER: &str =
    "schoolName,forename,surname,email,passwordHash,dob,address,postcode,gender,phoneNo,medicalNotes";

pub const TEACHER_HEADER: &str = "schoolName,forename,surname,email,passwordHash,dob,address,postcode,gender,phoneNo,medicalNotes,subjectsTeaching,formTutoring";

pub const STUDENT_HEADER: &str = "schoolName,forename,surname,email,passwordHash,dob,address,postcode,gender,phoneNo,upn,fileOpened,guardianName,guardianPhone,yearGroup,form,medicalNotes";

/// A staff row for `email`
pub fn staff_row(email: &str) -> String {
    format!("{SCHOOL},Sam,Jones,{email},h4sh,1980-02-03,1 High Street,TN22 1AA,F,07700900001,None")
}

/// A teacher row for `email`
pub fn teacher_row(email: &str) -> String {
    format!(
        "{SCHOOL},Priya,Shah,{email},h4sh,1975-06-12,2 High Street,TN22 1AB,F,07700900002,None,\"Maths, Physics\",10B"
    )
}

/// A student row for `email`
pub fn student_row(email: &str) -> String {
    format!(
        "{SCHOOL},Tom,Reed,{email},h4sh,2010-09-01,3 High Street,TN22 1AC,M,07700900003,A123456789012,2021-09-01,Jo Reed,07700900004,Year 9,9R,Asthma"
    )
}

/// A CSV document made of `header` and `rows`
pub fn csv(header: &str, rows: &[String]) -> String {
    let mut out = String::from(header);
    for row in rows {
        out.push('\n');
        out.push_str(row);
    }
    out.push('\n');
    out
}

/// A unique email address for imported rows
pub fn unique_email(prefix: &str) -> String {
    format!("{prefix}{}@uckfield.example", unique_suffix())
}
