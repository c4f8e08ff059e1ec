use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::job::application::domain::{JobChanges, JobState, NewJob};

/// Editable job fields
#[derive(Debug, Deserialize, ToSchema)]
pub struct JobPayload {
    #[schema(example = "PT Telkom Indonesia")]
    pub company_name: String,

    #[schema(example = "Backend Engineer")]
    pub position: String,

    #[schema(example = "Telekomunikasi")]
    pub industry: String,

    #[schema(example = "Surabaya")]
    pub work_location: String,

    #[schema(example = "10-15 juta")]
    pub salary_range: Option<String>,

    #[schema(example = "2023-08-01")]
    pub start_date: NaiveDate,

    /// Empty while the job is ongoing
    pub end_date: Option<NaiveDate>,

    #[schema(example = "Full-time")]
    pub employment_status: String,

    pub description: Option<String>,
}

impl From<JobPayload> for JobChanges {
    fn from(p: JobPayload) -> Self {
        JobChanges {
            company_name: p.company_name,
            position: p.position,
            industry: p.industry,
            work_location: p.work_location,
            salary_range: p.salary_range,
            start_date: p.start_date,
            end_date: p.end_date,
            employment_status: p.employment_status,
            description: p.description,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateJobRequest {
    pub alumni_id: Option<Uuid>,

    #[serde(flatten)]
    pub details: JobPayload,
}

impl From<CreateJobRequest> for NewJob {
    fn from(req: CreateJobRequest) -> Self {
        NewJob {
            alumni_id: req.alumni_id,
            details: req.details.into(),
        }
    }
}

/// Result of a trash or purge
#[derive(Debug, Serialize, ToSchema)]
pub struct JobStateChange {
    pub id: Uuid,
    pub state: JobState,
}
