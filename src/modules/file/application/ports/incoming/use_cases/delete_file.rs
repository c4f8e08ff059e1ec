use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::CallerIdentity;
use crate::modules::file::application::domain::DeletedFile;

use super::FileError;

#[async_trait]
pub trait DeleteFileUseCase: Send + Sync {
    async fn execute(&self, caller: CallerIdentity, file_id: Uuid)
        -> Result<DeletedFile, FileError>;
}
