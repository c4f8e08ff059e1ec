use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{NewUser, User};
use crate::shared::persistence::{DeadlineExceeded, StoreFailure};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError>;

    /// Looks a user up by username, or by email when the identifier
    /// contains `@`. Email comparison is case-insensitive.
    async fn find_by_identifier(&self, identifier: &str)
        -> Result<Option<User>, UserRepositoryError>;

    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserRepositoryError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<DeadlineExceeded> for UserRepositoryError {
    fn from(e: DeadlineExceeded) -> Self {
        UserRepositoryError::Unavailable(e.to_string())
    }
}

impl From<StoreFailure> for UserRepositoryError {
    fn from(failure: StoreFailure) -> Self {
        match failure {
            StoreFailure::Duplicate(_) => UserRepositoryError::UserAlreadyExists,
            StoreFailure::Unavailable(msg) => UserRepositoryError::Unavailable(msg),
            StoreFailure::MissingReference(msg) | StoreFailure::Other(msg) => {
                UserRepositoryError::DatabaseError(msg)
            }
        }
    }
}
