use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::CallerIdentity;
use crate::auth::application::domain::policies::{AccessPolicy, Action, Resource};
use crate::modules::alumni::application::ports::outgoing::AlumniRepository;
use crate::modules::job::application::domain::{Job, NewJob};
use crate::modules::job::application::ports::incoming::use_cases::{
    CreateJobUseCase, JobCommandError,
};
use crate::modules::job::application::ports::outgoing::JobRepository;
use crate::shared::persistence::{bounded, SINGLE_RECORD};

use super::job_access::{find_alumni, owner_of};

pub struct CreateJobService<J, A>
where
    J: JobRepository,
    A: AlumniRepository,
{
    jobs: J,
    alumni: A,
}

impl<J, A> CreateJobService<J, A>
where
    J: JobRepository,
    A: AlumniRepository,
{
    pub fn new(jobs: J, alumni: A) -> Self {
        Self { jobs, alumni }
    }
}

#[async_trait]
impl<J, A> CreateJobUseCase for CreateJobService<J, A>
where
    J: JobRepository + Send + Sync,
    A: AlumniRepository + Send + Sync,
{
    async fn execute(&self, caller: CallerIdentity, job: NewJob) -> Result<Job, JobCommandError> {
        let job = NewJob {
            alumni_id: job.alumni_id,
            details: job.details.normalized(),
        };
        let alumni_id = job.validate()?;

        let profile = find_alumni(&self.alumni, alumni_id)
            .await?
            .ok_or(JobCommandError::AlumniNotFound)?;

        AccessPolicy::authorize(
            &caller,
            Action::Create,
            &Resource::Job {
                owner: owner_of(Some(&profile)),
            },
        )?;

        let created = bounded(SINGLE_RECORD, self.jobs.insert(profile.id, job.details)).await?;

        info!(
            job_id = %created.id,
            alumni_id = %created.alumni_id,
            created_by = %caller.user_id,
            "Job created"
        );
        Ok(created)
    }
}
