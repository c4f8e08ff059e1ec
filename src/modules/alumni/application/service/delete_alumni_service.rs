use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::CallerIdentity;
use crate::auth::application::domain::policies::{AccessPolicy, Action, Resource};
use crate::modules::alumni::application::ports::incoming::use_cases::{
    DeleteAlumniError, DeleteAlumniUseCase,
};
use crate::modules::alumni::application::ports::outgoing::AlumniRepository;
use crate::shared::persistence::{bounded, SINGLE_RECORD};

pub struct DeleteAlumniService<R>
where
    R: AlumniRepository,
{
    repository: R,
}

impl<R> DeleteAlumniService<R>
where
    R: AlumniRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteAlumniUseCase for DeleteAlumniService<R>
where
    R: AlumniRepository + Send + Sync,
{
    async fn execute(
        &self,
        caller: CallerIdentity,
        alumni_id: Uuid,
    ) -> Result<(), DeleteAlumniError> {
        AccessPolicy::authorize(&caller, Action::Delete, &Resource::Alumni)?;

        bounded(SINGLE_RECORD, self.repository.delete(alumni_id)).await?;

        info!(%alumni_id, deleted_by = %caller.user_id, "Alumni deleted");
        Ok(())
    }
}
