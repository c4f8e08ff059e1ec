use crate::auth::application::domain::policies::PolicyViolation;
use crate::modules::alumni::application::ports::outgoing::AlumniRepositoryError;
use crate::modules::job::application::domain::{JobValidationError, LifecycleViolation};
use crate::modules::job::application::ports::outgoing::JobRepositoryError;

/// Failure of a read-side job use case.
#[derive(Debug, Clone, thiserror::Error)]
pub enum JobQueryError {
    #[error("Job not found")]
    NotFound,

    #[error("Alumni not found")]
    AlumniNotFound,

    #[error(transparent)]
    Forbidden(#[from] PolicyViolation),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<JobRepositoryError> for JobQueryError {
    fn from(err: JobRepositoryError) -> Self {
        match err {
            JobRepositoryError::NotFound => JobQueryError::NotFound,
            JobRepositoryError::UnknownAlumni => JobQueryError::AlumniNotFound,
            JobRepositoryError::Unavailable(msg) => JobQueryError::Unavailable(msg),
            JobRepositoryError::DatabaseError(msg) => JobQueryError::RepositoryError(msg),
        }
    }
}

impl From<AlumniRepositoryError> for JobQueryError {
    fn from(err: AlumniRepositoryError) -> Self {
        match err {
            AlumniRepositoryError::NotFound => JobQueryError::AlumniNotFound,
            AlumniRepositoryError::Unavailable(msg) => JobQueryError::Unavailable(msg),
            other => JobQueryError::RepositoryError(other.to_string()),
        }
    }
}

/// Failure of a job write: create, update or a lifecycle transition.
#[derive(Debug, Clone, thiserror::Error)]
pub enum JobCommandError {
    #[error("Job not found")]
    NotFound,

    #[error("Alumni not found")]
    AlumniNotFound,

    #[error(transparent)]
    Forbidden(#[from] PolicyViolation),

    #[error(transparent)]
    Validation(#[from] JobValidationError),

    #[error("Job is not in the trash")]
    NotTrashed,

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<LifecycleViolation> for JobCommandError {
    fn from(violation: LifecycleViolation) -> Self {
        match violation {
            LifecycleViolation::NotVisible => JobCommandError::NotFound,
            LifecycleViolation::NotTrashed => JobCommandError::NotTrashed,
        }
    }
}

impl From<JobRepositoryError> for JobCommandError {
    fn from(err: JobRepositoryError) -> Self {
        match err {
            JobRepositoryError::NotFound => JobCommandError::NotFound,
            JobRepositoryError::UnknownAlumni => JobCommandError::AlumniNotFound,
            JobRepositoryError::Unavailable(msg) => JobCommandError::Unavailable(msg),
            JobRepositoryError::DatabaseError(msg) => JobCommandError::RepositoryError(msg),
        }
    }
}

impl From<AlumniRepositoryError> for JobCommandError {
    fn from(err: AlumniRepositoryError) -> Self {
        match err {
            AlumniRepositoryError::NotFound => JobCommandError::AlumniNotFound,
            AlumniRepositoryError::Unavailable(msg) => JobCommandError::Unavailable(msg),
            other => JobCommandError::RepositoryError(other.to_string()),
        }
    }
}
