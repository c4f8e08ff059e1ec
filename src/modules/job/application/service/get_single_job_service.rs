use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::CallerIdentity;
use crate::auth::application::domain::policies::{AccessPolicy, Action, Resource};
use crate::modules::job::application::domain::Job;
use crate::modules::job::application::ports::incoming::use_cases::{
    GetSingleJobUseCase, JobQueryError,
};
use crate::modules::job::application::ports::outgoing::JobRepository;
use crate::shared::persistence::{bounded, SINGLE_RECORD};

pub struct GetSingleJobService<J>
where
    J: JobRepository,
{
    jobs: J,
}

impl<J> GetSingleJobService<J>
where
    J: JobRepository,
{
    pub fn new(jobs: J) -> Self {
        Self { jobs }
    }
}

#[async_trait]
impl<J> GetSingleJobUseCase for GetSingleJobService<J>
where
    J: JobRepository + Send + Sync,
{
    async fn execute(&self, caller: CallerIdentity, job_id: Uuid) -> Result<Job, JobQueryError> {
        AccessPolicy::authorize(&caller, Action::Read, &Resource::Job { owner: None })?;

        bounded(SINGLE_RECORD, self.jobs.find_by_id(job_id))
            .await?
            .filter(|job| job.state().is_visible())
            .ok_or(JobQueryError::NotFound)
    }
}
