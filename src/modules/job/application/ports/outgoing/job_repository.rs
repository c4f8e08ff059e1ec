use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::job::application::domain::{
    AlumniJobCount, Job, JobChanges, JobState, TrashEntry,
};
use crate::shared::pagination::{ListQuery, PageResult};
use crate::shared::persistence::{DeadlineExceeded, StoreFailure};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JobRepositoryError {
    /// No row matched, either absent or in the wrong state.
    #[error("Job not found")]
    NotFound,

    #[error("Referenced alumni does not exist")]
    UnknownAlumni,

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<DeadlineExceeded> for JobRepositoryError {
    fn from(e: DeadlineExceeded) -> Self {
        JobRepositoryError::Unavailable(e.to_string())
    }
}

impl From<StoreFailure> for JobRepositoryError {
    fn from(failure: StoreFailure) -> Self {
        match failure {
            StoreFailure::MissingReference(_) => JobRepositoryError::UnknownAlumni,
            StoreFailure::Unavailable(msg) => JobRepositoryError::Unavailable(msg),
            StoreFailure::Duplicate(msg) | StoreFailure::Other(msg) => {
                JobRepositoryError::DatabaseError(msg)
            }
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Query
// ──────────────────────────────────────────────────────────
//

/// Listing filter. `state` is either Active or Trashed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobListQuery {
    pub state: JobState,
    pub alumni_id: Option<Uuid>,
    pub page: ListQuery,
}

impl JobListQuery {
    pub fn active(page: ListQuery) -> Self {
        Self {
            state: JobState::Active,
            alumni_id: None,
            page,
        }
    }

    pub fn of_alumni(mut self, alumni_id: Uuid) -> Self {
        self.alumni_id = Some(alumni_id);
        self
    }

    pub fn wants_deleted(&self) -> bool {
        self.state != JobState::Active
    }
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

/// State-changing writes are conditional on the record's current state
/// and answer `NotFound` when no row matched.
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Finds a record in any state.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>, JobRepositoryError>;

    /// `search` matches company, position, industry or location.
    async fn list(&self, query: &JobListQuery) -> Result<PageResult<Job>, JobRepositoryError>;

    async fn insert(&self, alumni_id: Uuid, job: JobChanges) -> Result<Job, JobRepositoryError>;

    /// Applies only while Active.
    async fn update(&self, id: Uuid, changes: JobChanges) -> Result<Job, JobRepositoryError>;

    /// Active → Trashed.
    async fn mark_deleted(&self, id: Uuid) -> Result<Job, JobRepositoryError>;

    /// Trashed → Active.
    async fn restore(&self, id: Uuid) -> Result<Job, JobRepositoryError>;

    /// Removes a Trashed record.
    async fn delete_permanently(&self, id: Uuid) -> Result<(), JobRepositoryError>;

    /// Alumni whose Active job count reaches `min_count`.
    async fn active_job_counts(
        &self,
        alumni_id: Option<Uuid>,
        min_count: u64,
    ) -> Result<Vec<AlumniJobCount>, JobRepositoryError>;

    async fn trash(&self, alumni_id: Option<Uuid>) -> Result<Vec<TrashEntry>, JobRepositoryError>;
}

#[cfg(test)]
mockall::mock! {
    pub JobRepo {}

    #[async_trait]
    impl JobRepository for JobRepo {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>, JobRepositoryError>;
        async fn list(&self, query: &JobListQuery)
            -> Result<PageResult<Job>, JobRepositoryError>;
        async fn insert(&self, alumni_id: Uuid, job: JobChanges)
            -> Result<Job, JobRepositoryError>;
        async fn update(&self, id: Uuid, changes: JobChanges) -> Result<Job, JobRepositoryError>;
        async fn mark_deleted(&self, id: Uuid) -> Result<Job, JobRepositoryError>;
        async fn restore(&self, id: Uuid) -> Result<Job, JobRepositoryError>;
        async fn delete_permanently(&self, id: Uuid) -> Result<(), JobRepositoryError>;
        async fn active_job_counts(
            &self,
            alumni_id: Option<Uuid>,
            min_count: u64,
        ) -> Result<Vec<AlumniJobCount>, JobRepositoryError>;
        async fn trash(&self, alumni_id: Option<Uuid>)
            -> Result<Vec<TrashEntry>, JobRepositoryError>;
    }
}
