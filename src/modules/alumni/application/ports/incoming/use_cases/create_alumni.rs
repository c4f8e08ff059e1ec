use async_trait::async_trait;

use crate::auth::application::domain::entities::CallerIdentity;
use crate::auth::application::domain::policies::PolicyViolation;
use crate::modules::alumni::application::domain::{Alumni, AlumniValidationError, NewAlumni};
use crate::modules::alumni::application::ports::outgoing::AlumniRepositoryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateAlumniError {
    #[error(transparent)]
    Forbidden(#[from] PolicyViolation),

    #[error(transparent)]
    Validation(#[from] AlumniValidationError),

    #[error("NIM is already registered")]
    DuplicateNim,

    #[error("Account is already linked to an alumni profile")]
    DuplicateUser,

    #[error("Linked account does not exist")]
    UnknownUser,

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<AlumniRepositoryError> for CreateAlumniError {
    fn from(err: AlumniRepositoryError) -> Self {
        match err {
            AlumniRepositoryError::DuplicateNim => CreateAlumniError::DuplicateNim,
            AlumniRepositoryError::DuplicateUser => CreateAlumniError::DuplicateUser,
            AlumniRepositoryError::UnknownUser => CreateAlumniError::UnknownUser,
            AlumniRepositoryError::Unavailable(msg) => CreateAlumniError::Unavailable(msg),
            other => CreateAlumniError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait CreateAlumniUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: CallerIdentity,
        alumni: NewAlumni,
    ) -> Result<Alumni, CreateAlumniError>;
}
