use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::CallerIdentity;
use crate::modules::file::application::domain::StoredFile;

use super::FileError;

#[async_trait]
pub trait GetFileUseCase: Send + Sync {
    async fn execute(&self, caller: CallerIdentity, file_id: Uuid)
        -> Result<StoredFile, FileError>;
}
