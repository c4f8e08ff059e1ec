use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::CallerIdentity;
use crate::auth::application::domain::policies::PolicyViolation;
use crate::modules::alumni::application::ports::outgoing::AlumniRepositoryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteAlumniError {
    #[error("Alumni not found")]
    NotFound,

    #[error(transparent)]
    Forbidden(#[from] PolicyViolation),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<AlumniRepositoryError> for DeleteAlumniError {
    fn from(err: AlumniRepositoryError) -> Self {
        match err {
            AlumniRepositoryError::NotFound => DeleteAlumniError::NotFound,
            AlumniRepositoryError::Unavailable(msg) => DeleteAlumniError::Unavailable(msg),
            other => DeleteAlumniError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait DeleteAlumniUseCase: Send + Sync {
    async fn execute(&self, caller: CallerIdentity, alumni_id: Uuid)
        -> Result<(), DeleteAlumniError>;
}
