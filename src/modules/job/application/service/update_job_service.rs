use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::CallerIdentity;
use crate::modules::alumni::application::ports::outgoing::AlumniRepository;
use crate::modules::job::application::domain::{Job, JobChanges, LifecycleAction};
use crate::modules::job::application::ports::incoming::use_cases::{
    JobCommandError, UpdateJobUseCase,
};
use crate::modules::job::application::ports::outgoing::JobRepository;
use crate::shared::persistence::{bounded, SINGLE_RECORD};

use super::job_access::authorize_transition;

pub struct UpdateJobService<J, A>
where
    J: JobRepository,
    A: AlumniRepository,
{
    jobs: J,
    alumni: A,
}

impl<J, A> UpdateJobService<J, A>
where
    J: JobRepository,
    A: AlumniRepository,
{
    pub fn new(jobs: J, alumni: A) -> Self {
        Self { jobs, alumni }
    }
}

#[async_trait]
impl<J, A> UpdateJobUseCase for UpdateJobService<J, A>
where
    J: JobRepository + Send + Sync,
    A: AlumniRepository + Send + Sync,
{
    async fn execute(
        &self,
        caller: CallerIdentity,
        job_id: Uuid,
        changes: JobChanges,
    ) -> Result<Job, JobCommandError> {
        authorize_transition(
            &self.jobs,
            &self.alumni,
            &caller,
            job_id,
            LifecycleAction::Update,
        )
        .await?;

        let changes = changes.normalized();
        changes.validate()?;

        // A concurrent soft delete makes the conditional write miss: NotFound
        let updated = bounded(SINGLE_RECORD, self.jobs.update(job_id, changes)).await?;

        info!(%job_id, updated_by = %caller.user_id, "Job updated");
        Ok(updated)
    }
}
