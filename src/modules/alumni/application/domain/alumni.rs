use chrono::{DateTime, Utc};
use email_address::EmailAddress;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

pub const MIN_YEAR: i32 = 1950;
pub const MAX_YEAR: i32 = 2100;
pub const MAX_NIM_LEN: usize = 20;

/// Keys accepted by `sort_by` on alumni listings.
pub const SORTABLE_FIELDS: &[&str] = &[
    "created_at",
    "name",
    "nim",
    "major",
    "cohort_year",
    "graduation_year",
];
pub const DEFAULT_SORT: &str = "created_at";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Alumni {
    pub id: Uuid,
    /// Linked account. Profiles created by an admin may have none.
    pub user_id: Option<Uuid>,
    pub nim: String,
    pub name: String,
    pub major: String,
    pub cohort_year: i32,
    pub graduation_year: i32,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlumniValidationError {
    #[error("Name is required")]
    EmptyName,

    #[error("NIM must be 1-{MAX_NIM_LEN} characters of letters, digits, '.' or '-'")]
    InvalidNim,

    #[error("Major is required")]
    EmptyMajor,

    #[error("Year {0} is outside {MIN_YEAR}-{MAX_YEAR}")]
    YearOutOfRange(i32),

    #[error("Graduation year cannot precede cohort year")]
    GraduationBeforeCohort,

    #[error("Invalid email format")]
    InvalidEmail,
}

/// Editable profile fields. Used whole for both creation and replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlumniChanges {
    pub nim: String,
    pub name: String,
    pub major: String,
    pub cohort_year: i32,
    pub graduation_year: i32,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn is_valid_nim(nim: &str) -> bool {
    !nim.is_empty()
        && nim.chars().count() <= MAX_NIM_LEN
        && nim
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
}

impl AlumniChanges {
    /// Trims text fields and lowercases the email.
    pub fn normalized(self) -> Self {
        Self {
            nim: self.nim.trim().to_string(),
            name: self.name.trim().to_string(),
            major: self.major.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            phone: blank_to_none(self.phone),
            address: blank_to_none(self.address),
            ..self
        }
    }

    pub fn validate(&self) -> Result<(), AlumniValidationError> {
        if self.name.trim().is_empty() {
            return Err(AlumniValidationError::EmptyName);
        }
        if !is_valid_nim(self.nim.trim()) {
            return Err(AlumniValidationError::InvalidNim);
        }
        if self.major.trim().is_empty() {
            return Err(AlumniValidationError::EmptyMajor);
        }
        for year in [self.cohort_year, self.graduation_year] {
            if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
                return Err(AlumniValidationError::YearOutOfRange(year));
            }
        }
        if self.graduation_year < self.cohort_year {
            return Err(AlumniValidationError::GraduationBeforeCohort);
        }
        if !EmailAddress::is_valid(self.email.trim()) {
            return Err(AlumniValidationError::InvalidEmail);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAlumni {
    pub user_id: Option<Uuid>,
    pub fields: AlumniChanges,
}

impl NewAlumni {
    pub fn validate(&self) -> Result<(), AlumniValidationError> {
        self.fields.validate()
    }
}

/// Outcome of the public NIM lookup.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AlumniCheck {
    pub is_alumni: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alumni: Option<Alumni>,
}
