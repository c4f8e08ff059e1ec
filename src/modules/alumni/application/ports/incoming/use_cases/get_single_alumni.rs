use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::CallerIdentity;
use crate::auth::application::domain::policies::PolicyViolation;
use crate::modules::alumni::application::domain::Alumni;
use crate::modules::alumni::application::ports::outgoing::AlumniRepositoryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleAlumniError {
    #[error("Alumni not found")]
    NotFound,

    #[error(transparent)]
    Forbidden(#[from] PolicyViolation),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<AlumniRepositoryError> for GetSingleAlumniError {
    fn from(err: AlumniRepositoryError) -> Self {
        match err {
            AlumniRepositoryError::NotFound => GetSingleAlumniError::NotFound,
            AlumniRepositoryError::Unavailable(msg) => GetSingleAlumniError::Unavailable(msg),
            other => GetSingleAlumniError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait GetSingleAlumniUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: CallerIdentity,
        alumni_id: Uuid,
    ) -> Result<Alumni, GetSingleAlumniError>;
}
