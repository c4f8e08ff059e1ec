use async_trait::async_trait;

use crate::auth::application::domain::entities::CallerIdentity;
use crate::auth::application::domain::policies::{AccessPolicy, Action, Resource, Scope};
use crate::modules::file::application::domain::StoredFile;
use crate::modules::file::application::ports::incoming::use_cases::{FileError, ListFilesUseCase};
use crate::modules::file::application::ports::outgoing::FileRepository;
use crate::shared::persistence::{bounded, COLLECTION};

pub struct ListFilesService<R>
where
    R: FileRepository,
{
    files: R,
}

impl<R> ListFilesService<R>
where
    R: FileRepository,
{
    pub fn new(files: R) -> Self {
        Self { files }
    }
}

#[async_trait]
impl<R> ListFilesUseCase for ListFilesService<R>
where
    R: FileRepository + Send + Sync,
{
    async fn execute(&self, caller: CallerIdentity) -> Result<Vec<StoredFile>, FileError> {
        let owner = match AccessPolicy::scope(&caller) {
            Scope::All => None,
            Scope::OwnedBy(user_id) => {
                AccessPolicy::authorize(
                    &caller,
                    Action::Read,
                    &Resource::UserFiles { owner: user_id },
                )?;
                Some(user_id.value())
            }
        };

        Ok(bounded(COLLECTION, self.files.list(owner)).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::Role;
    use crate::modules::file::application::ports::outgoing::MockFileRepo;
    use crate::tests::support::fixtures::file_fixture;
    use uuid::Uuid;

    #[tokio::test]
    async fn admin_lists_everything() {
        let mut files = MockFileRepo::new();
        files
            .expect_list()
            .withf(|owner| owner.is_none())
            .returning(|_| Ok(vec![file_fixture(Uuid::new_v4()), file_fixture(Uuid::new_v4())]));

        let service = ListFilesService::new(files);
        let caller = CallerIdentity::new(Uuid::new_v4(), Role::Admin);

        assert_eq!(service.execute(caller).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn alumni_lists_own_files() {
        let me = Uuid::new_v4();
        let mut files = MockFileRepo::new();
        files
            .expect_list()
            .withf(move |owner| *owner == Some(me))
            .returning(move |_| Ok(vec![file_fixture(me)]));

        let service = ListFilesService::new(files);
        let caller = CallerIdentity::new(me, Role::Alumni);

        let listed = service.execute(caller).await.unwrap();
        assert!(listed.iter().all(|f| f.user_id == me));
    }
}
