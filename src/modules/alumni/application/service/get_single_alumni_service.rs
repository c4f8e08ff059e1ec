use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::CallerIdentity;
use crate::auth::application::domain::policies::{AccessPolicy, Action, Resource};
use crate::modules::alumni::application::domain::Alumni;
use crate::modules::alumni::application::ports::incoming::use_cases::{
    GetSingleAlumniError, GetSingleAlumniUseCase,
};
use crate::modules::alumni::application::ports::outgoing::AlumniRepository;
use crate::shared::persistence::{bounded, SINGLE_RECORD};

pub struct GetSingleAlumniService<R>
where
    R: AlumniRepository,
{
    repository: R,
}

impl<R> GetSingleAlumniService<R>
where
    R: AlumniRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetSingleAlumniUseCase for GetSingleAlumniService<R>
where
    R: AlumniRepository + Send + Sync,
{
    async fn execute(
        &self,
        caller: CallerIdentity,
        alumni_id: Uuid,
    ) -> Result<Alumni, GetSingleAlumniError> {
        AccessPolicy::authorize(&caller, Action::Read, &Resource::Alumni)?;

        bounded(SINGLE_RECORD, self.repository.find_by_id(alumni_id))
            .await?
            .ok_or(GetSingleAlumniError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::Role;
    use crate::modules::alumni::application::ports::outgoing::MockAlumniRepo;
    use crate::tests::support::fixtures::alumni_fixture;

    #[tokio::test]
    async fn returns_profile() {
        let stored = alumni_fixture(None);
        let id = stored.id;

        let mut repo = MockAlumniRepo::new();
        repo.expect_find_by_id()
            .withf(move |wanted| *wanted == id)
            .returning(move |_| Ok(Some(stored.clone())));

        let service = GetSingleAlumniService::new(repo);
        let caller = CallerIdentity::new(Uuid::new_v4(), Role::Alumni);

        let alumni = service.execute(caller, id).await.unwrap();
        assert_eq!(alumni.id, id);
    }

    #[tokio::test]
    async fn missing_profile_is_not_found() {
        let mut repo = MockAlumniRepo::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = GetSingleAlumniService::new(repo);
        let caller = CallerIdentity::new(Uuid::new_v4(), Role::Admin);

        let result = service.execute(caller, Uuid::new_v4()).await;
        assert!(matches!(result, Err(GetSingleAlumniError::NotFound)));
    }
}
