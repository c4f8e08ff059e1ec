use async_trait::async_trait;

use crate::auth::application::domain::entities::CallerIdentity;
use crate::modules::file::application::domain::{FileUpload, StoredFile};

use super::FileError;

#[async_trait]
pub trait UploadFileUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: CallerIdentity,
        upload: FileUpload,
    ) -> Result<StoredFile, FileError>;
}
