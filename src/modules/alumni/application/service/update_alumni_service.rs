use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::CallerIdentity;
use crate::auth::application::domain::policies::{AccessPolicy, Action, Resource};
use crate::modules::alumni::application::domain::{Alumni, AlumniChanges};
use crate::modules::alumni::application::ports::incoming::use_cases::{
    UpdateAlumniError, UpdateAlumniUseCase,
};
use crate::modules::alumni::application::ports::outgoing::AlumniRepository;
use crate::shared::persistence::{bounded, SINGLE_RECORD};

pub struct UpdateAlumniService<R>
where
    R: AlumniRepository,
{
    repository: R,
}

impl<R> UpdateAlumniService<R>
where
    R: AlumniRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateAlumniUseCase for UpdateAlumniService<R>
where
    R: AlumniRepository + Send + Sync,
{
    async fn execute(
        &self,
        caller: CallerIdentity,
        alumni_id: Uuid,
        changes: AlumniChanges,
    ) -> Result<Alumni, UpdateAlumniError> {
        AccessPolicy::authorize(&caller, Action::Update, &Resource::Alumni)?;

        let changes = changes.normalized();
        changes.validate()?;

        let updated = bounded(SINGLE_RECORD, self.repository.update(alumni_id, changes)).await?;

        info!(%alumni_id, "Alumni updated");
        Ok(updated)
    }
}
