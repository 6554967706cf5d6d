//! Role payloads - the per-role profile attached to a user
//!
//! A user carries at most one payload. [`RolePayload`] is a closed sum type,
//! so "two roles at once" cannot be represented.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::require;
use crate::error::DomainError;
use crate::value_objects::ImportRole;

/// Gender as recorded on staff, teacher and student profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
    NonBinary,
    Other,
}

impl Gender {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::NonBinary => "non-binary",
            Self::Other => "other",
        }
    }

    /// Parse `M`/`F`/`NB`/`O` or the full word, case-insensitively
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" | "male" => Ok(Self::Male),
            "f" | "female" => Ok(Self::Female),
            "nb" | "non-binary" | "nonbinary" | "non binary" => Ok(Self::NonBinary),
            "o" | "other" => Ok(Self::Other),
            _ => Err(DomainError::InvalidGender(s.to_string())),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Gender {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// School administrator profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolAdmin {
    pub username: String,
}

impl SchoolAdmin {
    pub fn validate(&self) -> Result<(), DomainError> {
        require("username", &self.username)
    }
}

/// Non-teaching staff profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub dob: String,
    pub address: String,
    pub postcode: String,
    pub gender: Gender,
    pub phone_no: String,
    pub medical_notes: String,
}

impl Staff {
    pub fn validate(&self) -> Result<(), DomainError> {
        require("dob", &self.dob)?;
        require("address", &self.address)?;
        require("postcode", &self.postcode)?;
        require("phoneNo", &self.phone_no)?;
        require("medicalNotes", &self.medical_notes)
    }
}

/// Teacher profile: the staff fields plus teaching assignments
///
/// `subjects_teaching` and `form_tutoring` are free text; no catalog of
/// subjects or forms exists to check them against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub dob: String,
    pub address: String,
    pub postcode: String,
    pub gender: Gender,
    pub phone_no: String,
    pub medical_notes: String,
    pub subjects_teaching: String,
    pub form_tutoring: String,
}

impl Teacher {
    pub fn validate(&self) -> Result<(), DomainError> {
        require("dob", &self.dob)?;
        require("address", &self.address)?;
        require("postcode", &self.postcode)?;
        require("phoneNo", &self.phone_no)?;
        require("medicalNotes", &self.medical_notes)?;
        require("subjectsTeaching", &self.subjects_teaching)?;
        require("formTutoring", &self.form_tutoring)
    }
}

/// Student profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// Photo reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub dob: String,
    pub address: String,
    pub postcode: String,
    pub gender: Gender,
    pub phone_no: String,
    /// Unique pupil number
    pub upn: String,
    pub file_opened: DateTime<Utc>,
    pub guardian_name: String,
    pub guardian_phone: String,
    pub year_group: String,
    pub form: String,
    pub medical_notes: String,
}

impl Student {
    pub fn validate(&self) -> Result<(), DomainError> {
        require("dob", &self.dob)?;
        require("address", &self.address)?;
        require("postcode", &self.postcode)?;
        require("phoneNo", &self.phone_no)?;
        require("upn", &self.upn)?;
        require("guardianName", &self.guardian_name)?;
        require("guardianPhone", &self.guardian_phone)?;
        require("yearGroup", &self.year_group)?;
        require("form", &self.form)?;
        require("medicalNotes", &self.medical_notes)
    }
}

/// Discriminant of a [`RolePayload`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleKind {
    SchoolAdmin,
    Staff,
    Teacher,
    Student,
}

impl RoleKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SchoolAdmin => "school_admin",
            Self::Staff => "staff",
            Self::Teacher => "teacher",
            Self::Student => "student",
        }
    }
}

impl fmt::Display for RoleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ImportRole> for RoleKind {
    fn from(role: ImportRole) -> Self {
        match role {
            ImportRole::Staff => Self::Staff,
            ImportRole::Teacher => Self::Teacher,
            ImportRole::Student => Self::Student,
        }
    }
}

/// The role-specific profile of a user: none, or exactly one of four
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RolePayload {
    #[default]
    None,
    SchoolAdmin(SchoolAdmin),
    Staff(Staff),
    Teacher(Teacher),
    Student(Student),
}

impl RolePayload {
    /// Which role is attached, if any
    pub fn kind(&self) -> Option<RoleKind> {
        match self {
            Self::None => None,
            Self::SchoolAdmin(_) => Some(RoleKind::SchoolAdmin),
            Self::Staff(_) => Some(RoleKind::Staff),
            Self::Teacher(_) => Some(RoleKind::Teacher),
            Self::Student(_) => Some(RoleKind::Student),
        }
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    #[inline]
    pub fn is_school_admin(&self) -> bool {
        matches!(self, Self::SchoolAdmin(_))
    }

    pub fn school_admin(&self) -> Option<&SchoolAdmin> {
        match self {
            Self::SchoolAdmin(p) => Some(p),
            _ => None,
        }
    }

    pub fn staff(&self) -> Option<&Staff> {
        match self {
            Self::Staff(p) => Some(p),
            _ => None,
        }
    }

    pub fn teacher(&self) -> Option<&Teacher> {
        match self {
            Self::Teacher(p) => Some(p),
            _ => None,
        }
    }

    pub fn student(&self) -> Option<&Student> {
        match self {
            Self::Student(p) => Some(p),
            _ => None,
        }
    }

    /// Check that every required field of the attached payload is present
    pub fn validate(&self) -> Result<(), DomainError> {
        match self {
            Self::None => Ok(()),
            Self::SchoolAdmin(p) => p.validate(),
            Self::Staff(p) => p.validate(),
            Self::Teacher(p) => p.validate(),
            Self::Student(p) => p.validate(),
        }
    }
}
