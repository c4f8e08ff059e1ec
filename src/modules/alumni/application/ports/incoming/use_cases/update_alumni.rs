use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::CallerIdentity;
use crate::auth::application::domain::policies::PolicyViolation;
use crate::modules::alumni::application::domain::{Alumni, AlumniChanges, AlumniValidationError};
use crate::modules::alumni::application::ports::outgoing::AlumniRepositoryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateAlumniError {
    #[error("Alumni not found")]
    NotFound,

    #[error(transparent)]
    Forbidden(#[from] PolicyViolation),

    #[error(transparent)]
    Validation(#[from] AlumniValidationError),

    #[error("NIM is already registered")]
    DuplicateNim,

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<AlumniRepositoryError> for UpdateAlumniError {
    fn from(err: AlumniRepositoryError) -> Self {
        match err {
            AlumniRepositoryError::NotFound => UpdateAlumniError::NotFound,
            AlumniRepositoryError::DuplicateNim => UpdateAlumniError::DuplicateNim,
            AlumniRepositoryError::Unavailable(msg) => UpdateAlumniError::Unavailable(msg),
            other => UpdateAlumniError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait UpdateAlumniUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: CallerIdentity,
        alumni_id: Uuid,
        changes: AlumniChanges,
    ) -> Result<Alumni, UpdateAlumniError>;
}
