use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::CallerIdentity;
use crate::modules::alumni::application::ports::outgoing::AlumniRepository;
use crate::modules::job::application::domain::{JobState, LifecycleAction};
use crate::modules::job::application::ports::incoming::use_cases::{
    JobCommandError, PurgeJobUseCase,
};
use crate::modules::job::application::ports::outgoing::{JobRepository, JobRepositoryError};
use crate::shared::persistence::{bounded, SINGLE_RECORD};

use super::job_access::authorize_transition;

pub struct PurgeJobService<J, A>
where
    J: JobRepository,
    A: AlumniRepository,
{
    jobs: J,
    alumni: A,
}

impl<J, A> PurgeJobService<J, A>
where
    J: JobRepository,
    A: AlumniRepository,
{
    pub fn new(jobs: J, alumni: A) -> Self {
        Self { jobs, alumni }
    }
}

#[async_trait]
impl<J, A> PurgeJobUseCase for PurgeJobService<J, A>
where
    J: JobRepository + Send + Sync,
    A: AlumniRepository + Send + Sync,
{
    async fn execute(
        &self,
        caller: CallerIdentity,
        job_id: Uuid,
    ) -> Result<JobState, JobCommandError> {
        let job = authorize_transition(
            &self.jobs,
            &self.alumni,
            &caller,
            job_id,
            LifecycleAction::Purge,
        )
        .await?;
        let next = job.state().transition(LifecycleAction::Purge)?;

        bounded(SINGLE_RECORD, self.jobs.delete_permanently(job_id))
            .await
            .map_err(|e| match e {
                JobRepositoryError::NotFound => JobCommandError::NotTrashed,
                other => other.into(),
            })?;

        info!(%job_id, alumni_id = %job.alumni_id, purged_by = %caller.user_id, "Job purged");
        Ok(next)
    }
}
