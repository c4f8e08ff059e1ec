use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::{CallerIdentity, UserId};
use crate::auth::application::domain::policies::{AccessPolicy, Action, Resource};
use crate::modules::file::application::domain::DeletedFile;
use crate::modules::file::application::ports::incoming::use_cases::{
    DeleteFileUseCase, FileError,
};
use crate::modules::file::application::ports::outgoing::{FileRepository, FileStorage};
use crate::shared::persistence::{bounded, SINGLE_RECORD};

pub struct DeleteFileService<R, S>
where
    R: FileRepository,
    S: FileStorage,
{
    files: R,
    storage: S,
}

impl<R, S> DeleteFileService<R, S>
where
    R: FileRepository,
    S: FileStorage,
{
    pub fn new(files: R, storage: S) -> Self {
        Self { files, storage }
    }
}

#[async_trait]
impl<R, S> DeleteFileUseCase for DeleteFileService<R, S>
where
    R: FileRepository + Send + Sync,
    S: FileStorage + Send + Sync,
{
    async fn execute(
        &self,
        caller: CallerIdentity,
        file_id: Uuid,
    ) -> Result<DeletedFile, FileError> {
        let file = bounded(SINGLE_RECORD, self.files.find_by_id(file_id))
            .await?
            .ok_or(FileError::NotFound)?;

        AccessPolicy::authorize(
            &caller,
            Action::Delete,
            &Resource::File {
                owner: UserId::from(file.user_id),
            },
        )?;

        // Metadata first: a record must never point at bytes that are gone
        bounded(SINGLE_RECORD, self.files.delete(file_id)).await?;

        let storage_removed = match self.storage.remove(&file.file_path).await {
            Ok(()) => true,
            Err(e) => {
                warn!(%file_id, path = %file.file_path, error = %e, "Stored bytes not removed");
                false
            }
        };

        info!(%file_id, deleted_by = %caller.user_id, storage_removed, "File deleted");
        Ok(DeletedFile {
            id: file_id,
            storage_removed,
        })
    }
}
