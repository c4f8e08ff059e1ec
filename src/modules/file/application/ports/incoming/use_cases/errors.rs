use crate::auth::application::domain::policies::PolicyViolation;
use crate::modules::file::application::domain::UploadRejected;
use crate::modules::file::application::ports::outgoing::{FileRepositoryError, FileStorageError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum FileError {
    #[error("File not found")]
    NotFound,

    #[error("Owner account does not exist")]
    UnknownOwner,

    #[error(transparent)]
    Forbidden(#[from] PolicyViolation),

    #[error(transparent)]
    Rejected(#[from] UploadRejected),

    #[error("File storage failed: {0}")]
    StorageFailed(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<FileRepositoryError> for FileError {
    fn from(err: FileRepositoryError) -> Self {
        match err {
            FileRepositoryError::NotFound => FileError::NotFound,
            FileRepositoryError::UnknownOwner => FileError::UnknownOwner,
            FileRepositoryError::Unavailable(msg) => FileError::Unavailable(msg),
            FileRepositoryError::DatabaseError(msg) => FileError::RepositoryError(msg),
        }
    }
}

impl From<FileStorageError> for FileError {
    fn from(err: FileStorageError) -> Self {
        FileError::StorageFailed(err.to_string())
    }
}
