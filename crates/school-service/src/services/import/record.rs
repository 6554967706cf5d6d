//! Row -> role payload conversion

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use validator::ValidateEmail;

use school_core::entities::{Gender, RolePayload, Staff, Student, Teacher};
use school_core::value_objects::ImportRole;

use super::error::ImportError;
use super::reader::Row;

const COMMON_COLUMNS: &[&str] = &["schoolName", "forename", "surname", "email", "passwordHash"];

const STAFF_COLUMNS: &[&str] = &["dob", "address", "postcode", "gender", "phoneNo", "medicalNotes"];

const TEACHER_COLUMNS: &[&str] = &[
    "dob",
    "address",
    "postcode",
    "gender",
    "phoneNo",
    "medicalNotes",
    "subjectsTeaching",
    "formTutoring",
];

const STUDENT_COLUMNS: &[&str] = &[
    "dob",
    "address",
    "postcode",
    "gender",
    "phoneNo",
    "upn",
    "fileOpened",
    "guardianName",
    "guardianPhone",
    "yearGroup",
    "form",
    "medicalNotes",
];

/// Header columns a file for `role` must carry
pub fn required_columns(role: ImportRole) -> Vec<&'static str> {
    let role_columns = match role {
        ImportRole::Staff => STAFF_COLUMNS,
        ImportRole::Teacher => TEACHER_COLUMNS,
        ImportRole::Student => STUDENT_COLUMNS,
    };
    COMMON_COLUMNS.iter().chain(role_columns).copied().collect()
}

/// A validated row, ready to be hashed and persisted
#[derive(Debug, Clone)]
pub struct ImportRecord {
    pub line: u64,
    pub school_name: String,
    pub forename: String,
    pub surname: String,
    /// Lowercased
    pub email: String,
    /// Client credential as supplied; hashed before storage
    pub credential: String,
    pub role: RolePayload,
}

impl ImportRecord {
    pub fn from_row(row: &Row, role: ImportRole) -> Result<Self, ImportError> {
        let email = row.required("email")?.to_lowercase();
        if !email.validate_email() {
            return Err(ImportError::invalid(row.line, "email", "not a valid email address"));
        }

        let payload = match role {
            ImportRole::Staff => RolePayload::Staff(staff(row)?),
            ImportRole::Teacher => RolePayload::Teacher(teacher(row)?),
            ImportRole::Student => RolePayload::Student(student(row)?),
        };

        Ok(Self {
            line: row.line,
            school_name: row.required("schoolName")?.to_string(),
            forename: row.required("forename")?.to_string(),
            surname: row.required("surname")?.to_string(),
            email,
            credential: row.required("passwordHash")?.to_string(),
            role: payload,
        })
    }
}

fn text(row: &Row, column: &'static str) -> Result<String, ImportError> {
    row.required(column).map(str::to_string)
}

fn gender(row: &Row) -> Result<Gender, ImportError> {
    let value = row.required("gender")?;
    Gender::parse(value).map_err(|_| {
        ImportError::invalid(row.line, "gender", format!("{value:?} is not one of M, F, NB, O"))
    })
}

/// RFC 3339, or `YYYY-MM-DD[ HH:MM[:SS]]` taken as UTC
fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(ts) = NaiveDateTime::parse_from_str(value, format) {
            return Some(ts.and_utc());
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|ts| ts.and_utc())
}

fn staff(row: &Row) -> Result<Staff, ImportError> {
    Ok(Staff {
        dob: text(row, "dob")?,
        address: text(row, "address")?,
        postcode: text(row, "postcode")?,
        gender: gender(row)?,
        phone_no: text(row, "phoneNo")?,
        medical_notes: text(row, "medicalNotes")?,
    })
}

fn teacher(row: &Row) -> Result<Teacher, ImportError> {
    Ok(Teacher {
        dob: text(row, "dob")?,
        address: text(row, "address")?,
        postcode: text(row, "postcode")?,
        gender: gender(row)?,
        phone_no: text(row, "phoneNo")?,
        medical_notes: text(row, "medicalNotes")?,
        subjects_teaching: text(row, "subjectsTeaching")?,
        form_tutoring: text(row, "formTutoring")?,
    })
}

fn student(row: &Row) -> Result<Student, ImportError> {
    let file_opened = row.required("fileOpened")?;
    let file_opened = parse_timestamp(file_opened).ok_or_else(|| {
        ImportError::invalid(
            row.line,
            "fileOpened",
            format!("{file_opened:?} is not a date (expected YYYY-MM-DD or RFC 3339)"),
        )
    })?;

    Ok(Student {
        image: row.optional("image").map(str::to_string),
        dob: text(row, "dob")?,
        address: text(row, "address")?,
        postcode: text(row, "postcode")?,
        gender: gender(row)?,
        phone_no: text(row, "phoneNo")?,
        upn: text(row, "upn")?,
        file_opened,
        guardian_name: text(row, "guardianName")?,
        guardian_phone: text(row, "guardianPhone")?,
        year_group: text(row, "yearGroup")?,
        form: text(row, "form")?,
        medical_notes: text(row, "medicalNotes")?,
    })
}
