use async_trait::async_trait;

use crate::auth::application::domain::entities::CallerIdentity;
use crate::auth::application::domain::policies::PolicyViolation;
use crate::modules::alumni::application::domain::Alumni;
use crate::modules::alumni::application::ports::outgoing::AlumniRepositoryError;
use crate::shared::pagination::{ListQuery, PageResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetAlumniListError {
    #[error(transparent)]
    Forbidden(#[from] PolicyViolation),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<AlumniRepositoryError> for GetAlumniListError {
    fn from(err: AlumniRepositoryError) -> Self {
        match err {
            AlumniRepositoryError::Unavailable(msg) => GetAlumniListError::Unavailable(msg),
            other => GetAlumniListError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
pub trait GetAlumniListUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: CallerIdentity,
        query: ListQuery,
    ) -> Result<PageResult<Alumni>, GetAlumniListError>;
}
