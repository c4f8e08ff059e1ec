use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::alumni::application::domain::{Alumni, AlumniChanges, NewAlumni};
use crate::shared::pagination::{ListQuery, PageResult};
use crate::shared::persistence::{DeadlineExceeded, StoreFailure};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlumniRepositoryError {
    #[error("Alumni not found")]
    NotFound,

    #[error("NIM is already registered")]
    DuplicateNim,

    #[error("Account is already linked to an alumni profile")]
    DuplicateUser,

    #[error("Linked account does not exist")]
    UnknownUser,

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<DeadlineExceeded> for AlumniRepositoryError {
    fn from(e: DeadlineExceeded) -> Self {
        AlumniRepositoryError::Unavailable(e.to_string())
    }
}

impl From<StoreFailure> for AlumniRepositoryError {
    fn from(failure: StoreFailure) -> Self {
        match failure {
            // Both backends name the violated index after its column
            StoreFailure::Duplicate(detail) if detail.contains("user_id") => {
                AlumniRepositoryError::DuplicateUser
            }
            StoreFailure::Duplicate(_) => AlumniRepositoryError::DuplicateNim,
            StoreFailure::MissingReference(_) => AlumniRepositoryError::UnknownUser,
            StoreFailure::Unavailable(msg) => AlumniRepositoryError::Unavailable(msg),
            StoreFailure::Other(msg) => AlumniRepositoryError::DatabaseError(msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait AlumniRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Alumni>, AlumniRepositoryError>;

    async fn find_by_user_id(&self, user_id: Uuid)
        -> Result<Option<Alumni>, AlumniRepositoryError>;

    async fn find_by_nim(&self, nim: &str) -> Result<Option<Alumni>, AlumniRepositoryError>;

    /// `search` matches name, nim or major case-insensitively.
    async fn list(&self, query: &ListQuery) -> Result<PageResult<Alumni>, AlumniRepositoryError>;

    async fn insert(&self, alumni: NewAlumni) -> Result<Alumni, AlumniRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        changes: AlumniChanges,
    ) -> Result<Alumni, AlumniRepositoryError>;

    /// Removes the profile together with its jobs.
    async fn delete(&self, id: Uuid) -> Result<(), AlumniRepositoryError>;
}

#[cfg(test)]
mockall::mock! {
    pub AlumniRepo {}

    #[async_trait]
    impl AlumniRepository for AlumniRepo {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<Alumni>, AlumniRepositoryError>;
        async fn find_by_user_id(&self, user_id: Uuid)
            -> Result<Option<Alumni>, AlumniRepositoryError>;
        async fn find_by_nim(&self, nim: &str) -> Result<Option<Alumni>, AlumniRepositoryError>;
        async fn list(&self, query: &ListQuery)
            -> Result<PageResult<Alumni>, AlumniRepositoryError>;
        async fn insert(&self, alumni: NewAlumni) -> Result<Alumni, AlumniRepositoryError>;
        async fn update(
            &self,
            id: Uuid,
            changes: AlumniChanges,
        ) -> Result<Alumni, AlumniRepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), AlumniRepositoryError>;
    }
}
