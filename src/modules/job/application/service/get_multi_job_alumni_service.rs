use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::CallerIdentity;
use crate::auth::application::domain::policies::{AccessPolicy, Action, Resource};
use crate::modules::alumni::application::ports::outgoing::AlumniRepository;
use crate::modules::job::application::domain::job::MULTI_JOB_MIN_COUNT;
use crate::modules::job::application::domain::AlumniJobCount;
use crate::modules::job::application::ports::incoming::use_cases::{
    GetMultiJobAlumniUseCase, JobQueryError,
};
use crate::modules::job::application::ports::outgoing::JobRepository;
use crate::shared::persistence::{bounded, COLLECTION};

use super::job_access::{find_alumni, owner_of};

pub struct GetMultiJobAlumniService<J, A>
where
    J: JobRepository,
    A: AlumniRepository,
{
    jobs: J,
    alumni: A,
}

impl<J, A> GetMultiJobAlumniService<J, A>
where
    J: JobRepository,
    A: AlumniRepository,
{
    pub fn new(jobs: J, alumni: A) -> Self {
        Self { jobs, alumni }
    }
}

#[async_trait]
impl<J, A> GetMultiJobAlumniUseCase for GetMultiJobAlumniService<J, A>
where
    J: JobRepository + Send + Sync,
    A: AlumniRepository + Send + Sync,
{
    async fn execute(
        &self,
        caller: CallerIdentity,
        alumni_id: Uuid,
    ) -> Result<Vec<AlumniJobCount>, JobQueryError> {
        let profile = find_alumni(&self.alumni, alumni_id)
            .await?
            .ok_or(JobQueryError::AlumniNotFound)?;

        AccessPolicy::authorize(
            &caller,
            Action::ViewAggregate,
            &Resource::JobsOfAlumni {
                owner: owner_of(Some(&profile)),
            },
        )?;

        let counts = bounded(
            COLLECTION,
            self.jobs
                .active_job_counts(Some(profile.id), MULTI_JOB_MIN_COUNT),
        )
        .await?;
        Ok(counts)
    }
}
