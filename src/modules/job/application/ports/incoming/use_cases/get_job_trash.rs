use async_trait::async_trait;

use crate::auth::application::domain::entities::CallerIdentity;
use crate::modules::job::application::domain::TrashEntry;

use super::JobQueryError;

/// Trashed jobs visible to the caller: all for admins, own for alumni.
#[async_trait]
pub trait GetJobTrashUseCase: Send + Sync {
    async fn execute(&self, caller: CallerIdentity) -> Result<Vec<TrashEntry>, JobQueryError>;
}
