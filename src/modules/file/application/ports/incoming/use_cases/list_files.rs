use async_trait::async_trait;

use crate::auth::application::domain::entities::CallerIdentity;
use crate::modules::file::application::domain::StoredFile;

use super::FileError;

#[async_trait]
pub trait ListFilesUseCase: Send + Sync {
    async fn execute(&self, caller: CallerIdentity) -> Result<Vec<StoredFile>, FileError>;
}
