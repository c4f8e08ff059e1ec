use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{CallerIdentity, UserId};
use crate::auth::application::domain::policies::{AccessPolicy, Action, Resource};
use crate::modules::file::application::domain::StoredFile;
use crate::modules::file::application::ports::incoming::use_cases::{FileError, GetFileUseCase};
use crate::modules::file::application::ports::outgoing::FileRepository;
use crate::shared::persistence::{bounded, SINGLE_RECORD};

pub struct GetFileService<R>
where
    R: FileRepository,
{
    files: R,
}

impl<R> GetFileService<R>
where
    R: FileRepository,
{
    pub fn new(files: R) -> Self {
        Self { files }
    }
}

#[async_trait]
impl<R> GetFileUseCase for GetFileService<R>
where
    R: FileRepository + Send + Sync,
{
    async fn execute(&self, caller: CallerIdentity, file_id: Uuid) -> Result<StoredFile, FileError> {
        let file = bounded(SINGLE_RECORD, self.files.find_by_id(file_id))
            .await?
            .ok_or(FileError::NotFound)?;

        AccessPolicy::authorize(
            &caller,
            Action::Read,
            &Resource::File {
                owner: UserId::from(file.user_id),
            },
        )?;

        Ok(file)
    }
}
