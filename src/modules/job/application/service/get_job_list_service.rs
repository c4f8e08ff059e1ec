use async_trait::async_trait;

use crate::auth::application::domain::entities::CallerIdentity;
use crate::auth::application::domain::policies::{AccessPolicy, Action, Resource};
use crate::modules::job::application::domain::Job;
use crate::modules::job::application::ports::incoming::use_cases::{
    GetJobListUseCase, JobQueryError,
};
use crate::modules::job::application::ports::outgoing::{JobListQuery, JobRepository};
use crate::shared::pagination::{ListQuery, PageResult};
use crate::shared::persistence::{bounded, COLLECTION};

pub struct GetJobListService<J>
where
    J: JobRepository,
{
    jobs: J,
}

impl<J> GetJobListService<J>
where
    J: JobRepository,
{
    pub fn new(jobs: J) -> Self {
        Self { jobs }
    }
}

#[async_trait]
impl<J> GetJobListUseCase for GetJobListService<J>
where
    J: JobRepository + Send + Sync,
{
    async fn execute(
        &self,
        caller: CallerIdentity,
        query: ListQuery,
    ) -> Result<PageResult<Job>, JobQueryError> {
        AccessPolicy::authorize(&caller, Action::Read, &Resource::Job { owner: None })?;

        let page = bounded(COLLECTION, self.jobs.list(&JobListQuery::active(query))).await?;
        Ok(page)
    }
}
