//! Import role label
//!
//! The role a bulk import assigns to every row of the uploaded file.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Role label accepted by the bulk import endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportRole {
    Staff,
    Teacher,
    Student,
}

impl ImportRole {
    /// All importable roles
    pub const ALL: [ImportRole; 3] = [Self::Staff, Self::Teacher, Self::Student];

    /// Label as used in URLs
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Staff => "staff",
            Self::Teacher => "teacher",
            Self::Student => "student",
        }
    }

    /// Parse a role label (case-insensitive)
    pub fn parse(label: &str) -> Result<Self, DomainError> {
        match label.trim().to_ascii_lowercase().as_str() {
            "staff" => Ok(Self::Staff),
            "teacher" => Ok(Self::Teacher),
            "student" => Ok(Self::Student),
            _ => Err(DomainError::UnknownRole(label.to_string())),
        }
    }
}

impl fmt::Display for ImportRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ImportRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
