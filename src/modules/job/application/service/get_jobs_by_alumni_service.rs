use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::CallerIdentity;
use crate::auth::application::domain::policies::{AccessPolicy, Action, Resource};
use crate::modules::alumni::application::ports::outgoing::AlumniRepository;
use crate::modules::job::application::domain::Job;
use crate::modules::job::application::ports::incoming::use_cases::{
    GetJobsByAlumniUseCase, JobQueryError,
};
use crate::modules::job::application::ports::outgoing::{JobListQuery, JobRepository};
use crate::shared::pagination::{ListQuery, PageResult};
use crate::shared::persistence::{bounded, COLLECTION};

use super::job_access::{find_alumni, owner_of};

pub struct GetJobsByAlumniService<J, A>
where
    J: JobRepository,
    A: AlumniRepository,
{
    jobs: J,
    alumni: A,
}

impl<J, A> GetJobsByAlumniService<J, A>
where
    J: JobRepository,
    A: AlumniRepository,
{
    pub fn new(jobs: J, alumni: A) -> Self {
        Self { jobs, alumni }
    }
}

#[async_trait]
impl<J, A> GetJobsByAlumniUseCase for GetJobsByAlumniService<J, A>
where
    J: JobRepository + Send + Sync,
    A: AlumniRepository + Send + Sync,
{
    async fn execute(
        &self,
        caller: CallerIdentity,
        alumni_id: Uuid,
        query: ListQuery,
    ) -> Result<PageResult<Job>, JobQueryError> {
        let profile = find_alumni(&self.alumni, alumni_id)
            .await?
            .ok_or(JobQueryError::AlumniNotFound)?;

        AccessPolicy::authorize(
            &caller,
            Action::ListByAlumni,
            &Resource::JobsOfAlumni {
                owner: owner_of(Some(&profile)),
            },
        )?;

        let filter = JobListQuery::active(query).of_alumni(profile.id);
        Ok(bounded(COLLECTION, self.jobs.list(&filter)).await?)
    }
}
