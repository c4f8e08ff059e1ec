use async_trait::async_trait;

use crate::auth::application::domain::entities::CallerIdentity;
use crate::auth::application::domain::policies::{AccessPolicy, Action, Resource, Scope};
use crate::modules::alumni::application::ports::outgoing::AlumniRepository;
use crate::modules::job::application::domain::TrashEntry;
use crate::modules::job::application::ports::incoming::use_cases::{
    GetJobTrashUseCase, JobQueryError,
};
use crate::modules::job::application::ports::outgoing::JobRepository;
use crate::shared::persistence::{bounded, COLLECTION};

use super::job_access::{caller_alumni, owner_of};

pub struct GetJobTrashService<J, A>
where
    J: JobRepository,
    A: AlumniRepository,
{
    jobs: J,
    alumni: A,
}

impl<J, A> GetJobTrashService<J, A>
where
    J: JobRepository,
    A: AlumniRepository,
{
    pub fn new(jobs: J, alumni: A) -> Self {
        Self { jobs, alumni }
    }
}

#[async_trait]
impl<J, A> GetJobTrashUseCase for GetJobTrashService<J, A>
where
    J: JobRepository + Send + Sync,
    A: AlumniRepository + Send + Sync,
{
    async fn execute(&self, caller: CallerIdentity) -> Result<Vec<TrashEntry>, JobQueryError> {
        let alumni_filter = match AccessPolicy::scope(&caller) {
            Scope::All => None,
            Scope::OwnedBy(user_id) => {
                let Some(profile) = caller_alumni(&self.alumni, user_id).await? else {
                    return Ok(Vec::new());
                };
                AccessPolicy::authorize(
                    &caller,
                    Action::ViewTrash,
                    &Resource::JobsOfAlumni {
                        owner: owner_of(Some(&profile)),
                    },
                )?;
                Some(profile.id)
            }
        };

        Ok(bounded(COLLECTION, self.jobs.trash(alumni_filter)).await?)
    }
}
