use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::file::application::domain::{NewStoredFile, StoredFile};
use crate::shared::persistence::{DeadlineExceeded, StoreFailure};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FileRepositoryError {
    #[error("File not found")]
    NotFound,

    #[error("Owner account does not exist")]
    UnknownOwner,

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<DeadlineExceeded> for FileRepositoryError {
    fn from(e: DeadlineExceeded) -> Self {
        FileRepositoryError::Unavailable(e.to_string())
    }
}

impl From<StoreFailure> for FileRepositoryError {
    fn from(failure: StoreFailure) -> Self {
        match failure {
            StoreFailure::MissingReference(_) => FileRepositoryError::UnknownOwner,
            StoreFailure::Unavailable(msg) => FileRepositoryError::Unavailable(msg),
            StoreFailure::Duplicate(msg) | StoreFailure::Other(msg) => {
                FileRepositoryError::DatabaseError(msg)
            }
        }
    }
}

/// Upload metadata. The bytes themselves live behind `FileStorage`.
#[async_trait]
pub trait FileRepository: Send + Sync {
    async fn insert(&self, file: NewStoredFile) -> Result<StoredFile, FileRepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<StoredFile>, FileRepositoryError>;

    /// Newest first. `None` lists every owner.
    async fn list(&self, owner: Option<Uuid>) -> Result<Vec<StoredFile>, FileRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), FileRepositoryError>;
}

#[cfg(test)]
mockall::mock! {
    pub FileRepo {}

    #[async_trait]
    impl FileRepository for FileRepo {
        async fn insert(&self, file: NewStoredFile) -> Result<StoredFile, FileRepositoryError>;
        async fn find_by_id(&self, id: Uuid) -> Result<Option<StoredFile>, FileRepositoryError>;
        async fn list(&self, owner: Option<Uuid>) -> Result<Vec<StoredFile>, FileRepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), FileRepositoryError>;
    }
}
