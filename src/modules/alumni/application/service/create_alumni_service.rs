use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::CallerIdentity;
use crate::auth::application::domain::policies::{AccessPolicy, Action, Resource};
use crate::modules::alumni::application::domain::{Alumni, NewAlumni};
use crate::modules::alumni::application::ports::incoming::use_cases::{
    CreateAlumniError, CreateAlumniUseCase,
};
use crate::modules::alumni::application::ports::outgoing::AlumniRepository;
use crate::shared::persistence::{bounded, SINGLE_RECORD};

pub struct CreateAlumniService<R>
where
    R: AlumniRepository,
{
    repository: R,
}

impl<R> CreateAlumniService<R>
where
    R: AlumniRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateAlumniUseCase for CreateAlumniService<R>
where
    R: AlumniRepository + Send + Sync,
{
    async fn execute(
        &self,
        caller: CallerIdentity,
        alumni: NewAlumni,
    ) -> Result<Alumni, CreateAlumniError> {
        AccessPolicy::authorize(&caller, Action::Create, &Resource::Alumni)?;

        let alumni = NewAlumni {
            user_id: alumni.user_id,
            fields: alumni.fields.normalized(),
        };
        alumni.validate()?;

        let created = bounded(SINGLE_RECORD, self.repository.insert(alumni)).await?;

        info!(alumni_id = %created.id, nim = %created.nim, "Alumni created");
        Ok(created)
    }
}
