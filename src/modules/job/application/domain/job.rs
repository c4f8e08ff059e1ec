use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::lifecycle::JobState;

/// Keys accepted by `sort_by` on job listings.
pub const SORTABLE_FIELDS: &[&str] = &[
    "created_at",
    "company_name",
    "position",
    "industry",
    "work_location",
    "start_date",
    "employment_status",
];
pub const DEFAULT_SORT: &str = "created_at";

/// Alumni with at least this many active jobs show up in the multi-job report.
pub const MULTI_JOB_MIN_COUNT: u64 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Job {
    pub id: Uuid,
    pub alumni_id: Uuid,
    pub company_name: String,
    pub position: String,
    pub industry: String,
    pub work_location: String,
    pub salary_range: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    /// Free text such as "Full-time" or "Kontrak"
    pub employment_status: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_deleted: bool,
}

impl Job {
    pub fn state(&self) -> JobState {
        JobState::from_deleted_flag(self.is_deleted)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JobValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("End date cannot precede start date")]
    EndBeforeStart,
}

/// Editable job fields. Used whole for both creation and replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobChanges {
    pub company_name: String,
    pub position: String,
    pub industry: String,
    pub work_location: String,
    pub salary_range: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub employment_status: String,
    pub description: Option<String>,
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl JobChanges {
    pub fn normalized(self) -> Self {
        Self {
            company_name: self.company_name.trim().to_string(),
            position: self.position.trim().to_string(),
            industry: self.industry.trim().to_string(),
            work_location: self.work_location.trim().to_string(),
            salary_range: blank_to_none(self.salary_range),
            employment_status: self.employment_status.trim().to_string(),
            description: blank_to_none(self.description),
            ..self
        }
    }

    pub fn validate(&self) -> Result<(), JobValidationError> {
        let required = [
            ("company_name", &self.company_name),
            ("position", &self.position),
            ("industry", &self.industry),
            ("work_location", &self.work_location),
            ("employment_status", &self.employment_status),
        ];
        if let Some((name, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(JobValidationError::MissingField(name));
        }

        if let Some(end) = self.end_date {
            if end < self.start_date {
                return Err(JobValidationError::EndBeforeStart);
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJob {
    pub alumni_id: Option<Uuid>,
    pub details: JobChanges,
}

impl NewJob {
    /// Returns the target alumni once every field checks out.
    pub fn validate(&self) -> Result<Uuid, JobValidationError> {
        self.details.validate()?;
        self.alumni_id
            .ok_or(JobValidationError::MissingField("alumni_id"))
    }
}

/// Active job count of one alumni.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AlumniJobCount {
    pub alumni_id: Uuid,
    pub alumni_name: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct TrashEntry {
    pub id: Uuid,
    pub alumni_id: Uuid,
    pub alumni_name: String,
    pub company_name: String,
    pub is_deleted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn changes() -> JobChanges {
        JobChanges {
            company_name: "PT Telkom Indonesia".into(),
            position: "Backend Engineer".into(),
            industry: "Telekomunikasi".into(),
            work_location: "Surabaya".into(),
            salary_range: Some("10-15 juta".into()),
            start_date: NaiveDate::from_ymd_opt(2023, 8, 1).unwrap(),
            end_date: None,
            employment_status: "Full-time".into(),
            description: None,
        }
    }

    #[test]
    fn complete_job_is_valid() {
        assert_eq!(changes().validate(), Ok(()));
    }

    #[test]
    fn first_blank_required_field_is_named() {
        let blank = JobChanges {
            company_name: "  ".into(),
            position: "".into(),
            ..changes()
        };
        assert_eq!(
            blank.validate(),
            Err(JobValidationError::MissingField("company_name"))
        );
    }

    #[test]
    fn end_date_cannot_precede_start() {
        let inverted = JobChanges {
            end_date: NaiveDate::from_ymd_opt(2023, 7, 31),
            ..changes()
        };
        assert_eq!(inverted.validate(), Err(JobValidationError::EndBeforeStart));

        let same_day = JobChanges {
            end_date: NaiveDate::from_ymd_opt(2023, 8, 1),
            ..changes()
        };
        assert_eq!(same_day.validate(), Ok(()));
    }

    #[test]
    fn new_job_requires_alumni() {
        let orphan = NewJob {
            alumni_id: None,
            details: changes(),
        };
        assert_eq!(
            orphan.validate(),
            Err(JobValidationError::MissingField("alumni_id"))
        );

        let id = Uuid::new_v4();
        let ok = NewJob {
            alumni_id: Some(id),
            details: changes(),
        };
        assert_eq!(ok.validate(), Ok(id));
    }

    #[test]
    fn normalization_drops_blank_optionals() {
        let normalized = JobChanges {
            salary_range: Some(" ".into()),
            description: Some(" Maintains billing APIs ".into()),
            position: " Backend Engineer ".into(),
            ..changes()
        }
        .normalized();

        assert_eq!(normalized.salary_range, None);
        assert_eq!(normalized.description.as_deref(), Some("Maintains billing APIs"));
        assert_eq!(normalized.position, "Backend Engineer");
    }

    #[test]
    fn state_follows_deleted_flag() {
        let job = Job {
            id: Uuid::new_v4(),
            alumni_id: Uuid::new_v4(),
            company_name: "PT A".into(),
            position: "Dev".into(),
            industry: "IT".into(),
            work_location: "Jakarta".into(),
            salary_range: None,
            start_date: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
            end_date: None,
            employment_status: "Kontrak".into(),
            description: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            is_deleted: true,
        };
        assert_eq!(job.state(), JobState::Trashed);
    }
}
