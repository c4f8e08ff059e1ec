use async_trait::async_trait;

use crate::auth::application::domain::entities::CallerIdentity;
use crate::auth::application::domain::policies::{AccessPolicy, Action, Resource};
use crate::modules::alumni::application::domain::Alumni;
use crate::modules::alumni::application::ports::incoming::use_cases::{
    GetAlumniListError, GetAlumniListUseCase,
};
use crate::modules::alumni::application::ports::outgoing::AlumniRepository;
use crate::shared::pagination::{ListQuery, PageResult};
use crate::shared::persistence::{bounded, COLLECTION};

pub struct GetAlumniListService<R>
where
    R: AlumniRepository,
{
    repository: R,
}

impl<R> GetAlumniListService<R>
where
    R: AlumniRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetAlumniListUseCase for GetAlumniListService<R>
where
    R: AlumniRepository + Send + Sync,
{
    async fn execute(
        &self,
        caller: CallerIdentity,
        query: ListQuery,
    ) -> Result<PageResult<Alumni>, GetAlumniListError> {
        AccessPolicy::authorize(&caller, Action::Read, &Resource::Alumni)?;

        let page = bounded(COLLECTION, self.repository.list(&query)).await?;
        Ok(page)
    }
}
