use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::User;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProvisionError {
    #[error("An alumni profile already exists for this account")]
    AlreadyLinked,

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Provisioning failed: {0}")]
    Failed(String),
}

/// Creates the alumni profile that belongs to a freshly registered
/// alumni account. Implemented by the alumni module.
#[async_trait]
pub trait AlumniProvisioner: Send + Sync {
    async fn provision_for(&self, user: &User) -> Result<Uuid, ProvisionError>;
}
