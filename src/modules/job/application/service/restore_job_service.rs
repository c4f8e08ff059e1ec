use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::CallerIdentity;
use crate::modules::alumni::application::ports::outgoing::AlumniRepository;
use crate::modules::job::application::domain::{Job, LifecycleAction};
use crate::modules::job::application::ports::incoming::use_cases::{
    JobCommandError, RestoreJobUseCase,
};
use crate::modules::job::application::ports::outgoing::{JobRepository, JobRepositoryError};
use crate::shared::persistence::{bounded, SINGLE_RECORD};

use super::job_access::authorize_transition;

pub struct RestoreJobService<J, A>
where
    J: JobRepository,
    A: AlumniRepository,
{
    jobs: J,
    alumni: A,
}

impl<J, A> RestoreJobService<J, A>
where
    J: JobRepository,
    A: AlumniRepository,
{
    pub fn new(jobs: J, alumni: A) -> Self {
        Self { jobs, alumni }
    }
}

#[async_trait]
impl<J, A> RestoreJobUseCase for RestoreJobService<J, A>
where
    J: JobRepository + Send + Sync,
    A: AlumniRepository + Send + Sync,
{
    async fn execute(&self, caller: CallerIdentity, job_id: Uuid) -> Result<Job, JobCommandError> {
        authorize_transition(
            &self.jobs,
            &self.alumni,
            &caller,
            job_id,
            LifecycleAction::Restore,
        )
        .await?;

        let restored = bounded(SINGLE_RECORD, self.jobs.restore(job_id))
            .await
            .map_err(|e| match e {
                // Someone else restored it first
                JobRepositoryError::NotFound => JobCommandError::NotTrashed,
                other => other.into(),
            })?;

        info!(%job_id, restored_by = %caller.user_id, "Job restored from trash");
        Ok(restored)
    }
}
