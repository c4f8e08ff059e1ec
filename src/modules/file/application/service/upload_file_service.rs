use async_trait::async_trait;
use tracing::{info, warn};

use crate::auth::application::domain::entities::{CallerIdentity, UserId};
use crate::auth::application::domain::policies::{AccessPolicy, Action, Resource};
use crate::modules::file::application::domain::{
    stored_name, FileUpload, NewStoredFile, StoredFile, UploadPolicy,
};
use crate::modules::file::application::ports::incoming::use_cases::{
    FileError, UploadFileUseCase,
};
use crate::modules::file::application::ports::outgoing::{FileRepository, FileStorage};
use crate::shared::persistence::{bounded, SINGLE_RECORD};

pub struct UploadFileService<R, S>
where
    R: FileRepository,
    S: FileStorage,
{
    files: R,
    storage: S,
}

impl<R, S> UploadFileService<R, S>
where
    R: FileRepository,
    S: FileStorage,
{
    pub fn new(files: R, storage: S) -> Self {
        Self { files, storage }
    }
}

#[async_trait]
impl<R, S> UploadFileUseCase for UploadFileService<R, S>
where
    R: FileRepository + Send + Sync,
    S: FileStorage + Send + Sync,
{
    async fn execute(
        &self,
        caller: CallerIdentity,
        upload: FileUpload,
    ) -> Result<StoredFile, FileError> {
        AccessPolicy::authorize(
            &caller,
            Action::Upload,
            &Resource::UserFiles {
                owner: UserId::from(upload.owner),
            },
        )?;

        let file_size = upload.bytes.len() as u64;
        UploadPolicy::check(upload.category, file_size, &upload.content_type)?;

        let file_name = stored_name(&upload.original_name);
        let file_path = self.storage.save(&file_name, upload.bytes).await?;

        let record = NewStoredFile {
            user_id: upload.owner,
            file_name,
            original_name: upload.original_name,
            file_path: file_path.clone(),
            file_size,
            file_type: upload.content_type.trim().to_ascii_lowercase(),
        };

        match bounded(SINGLE_RECORD, self.files.insert(record)).await {
            Ok(stored) => {
                info!(
                    file_id = %stored.id,
                    owner = %stored.user_id,
                    category = upload.category.as_str(),
                    size = stored.file_size,
                    "File uploaded"
                );
                Ok(stored)
            }
            Err(e) => {
                if let Err(cleanup) = self.storage.remove(&file_path).await {
                    warn!(path = %file_path, error = %cleanup, "Orphaned upload left on disk");
                }
                Err(e.into())
            }
        }
    }
}
