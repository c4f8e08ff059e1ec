use async_trait::async_trait;

use crate::modules::alumni::application::domain::AlumniCheck;
use crate::modules::alumni::application::ports::outgoing::AlumniRepositoryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckAlumniError {
    #[error("Invalid API key")]
    InvalidKey,

    #[error("NIM is required")]
    EmptyNim,

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<AlumniRepositoryError> for CheckAlumniError {
    fn from(err: AlumniRepositoryError) -> Self {
        match err {
            AlumniRepositoryError::Unavailable(msg) => CheckAlumniError::Unavailable(msg),
            other => CheckAlumniError::RepositoryError(other.to_string()),
        }
    }
}

/// Public lookup used by partner systems holding the shared API key.
#[async_trait]
pub trait CheckAlumniUseCase: Send + Sync {
    async fn execute(&self, key: &str, nim: &str) -> Result<AlumniCheck, CheckAlumniError>;
}
