//! Import pipeline errors

use thiserror::Error;

/// Why a bulk import was rejected
///
/// `line` is the 1-based line number in the uploaded file (the header is line 1).
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("unknown role label {0:?} (expected staff, teacher or student)")]
    UnknownRole(String),

    #[error("line {line}: missing column {column:?}")]
    MissingColumn { line: u64, column: &'static str },

    #[error("line {line}: invalid {column}: {reason}")]
    InvalidValue {
        line: u64,
        column: &'static str,
        reason: String,
    },

    #[error("line {line}: malformed CSV: {message}")]
    Csv { line: u64, message: String },

    #[error("line {line}: email {email:?} is already in use")]
    DuplicateEmail { line: u64, email: String },

    #[error("file contains no data rows")]
    Empty,

    #[error("file has more than {limit} data rows")]
    TooManyRows { limit: usize },

    #[error("line {line}: school {school:?} is not the importing admin's school")]
    ForeignSchool { line: u64, school: String },

    #[error("could not read uploaded file: {0}")]
    Io(#[from] std::io::Error),
}

impl ImportError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownRole(_) => "UNKNOWN_ROLE",
            Self::DuplicateEmail { .. } => "EMAIL_ALREADY_EXISTS",
            Self::TooManyRows { .. } => "TOO_MANY_ROWS",
            Self::ForeignSchool { .. } => "FOREIGN_SCHOOL",
            Self::Io(_) => "INTERNAL_ERROR",
            _ => "IMPORT_FAILED",
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            Self::UnknownRole(_) => 400,
            Self::DuplicateEmail { .. } => 409,
            Self::TooManyRows { .. } => 413,
            Self::ForeignSchool { .. } => 403,
            Self::Io(_) => 500,
            _ => 422,
        }
    }

    pub(crate) fn invalid(line: u64, column: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            line,
            column,
            reason: reason.into(),
        }
    }

    pub(crate) fn from_csv(err: &csv::Error, fallback_line: u64) -> Self {
        let line = err
            .position()
            .map_or(fallback_line, csv::Position::line);
        let message = match err.kind() {
            csv::ErrorKind::UnequalLengths {
                expected_len, len, ..
            } => format!("expected {expected_len} fields, found {len}"),
            _ => err.to_string(),
        };
        Self::Csv { line, message }
    }
}
