use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::CallerIdentity;
use crate::modules::alumni::application::ports::outgoing::AlumniRepository;
use crate::modules::job::application::domain::{JobState, LifecycleAction};
use crate::modules::job::application::ports::incoming::use_cases::{
    JobCommandError, SoftDeleteJobUseCase,
};
use crate::modules::job::application::ports::outgoing::JobRepository;
use crate::shared::persistence::{bounded, SINGLE_RECORD};

use super::job_access::authorize_transition;

pub struct SoftDeleteJobService<J, A>
where
    J: JobRepository,
    A: AlumniRepository,
{
    jobs: J,
    alumni: A,
}

impl<J, A> SoftDeleteJobService<J, A>
where
    J: JobRepository,
    A: AlumniRepository,
{
    pub fn new(jobs: J, alumni: A) -> Self {
        Self { jobs, alumni }
    }
}

#[async_trait]
impl<J, A> SoftDeleteJobUseCase for SoftDeleteJobService<J, A>
where
    J: JobRepository + Send + Sync,
    A: AlumniRepository + Send + Sync,
{
    async fn execute(
        &self,
        caller: CallerIdentity,
        job_id: Uuid,
    ) -> Result<JobState, JobCommandError> {
        authorize_transition(
            &self.jobs,
            &self.alumni,
            &caller,
            job_id,
            LifecycleAction::SoftDelete,
        )
        .await?;

        let trashed = bounded(SINGLE_RECORD, self.jobs.mark_deleted(job_id)).await?;

        info!(%job_id, deleted_by = %caller.user_id, "Job moved to trash");
        Ok(trashed.state())
    }
}
