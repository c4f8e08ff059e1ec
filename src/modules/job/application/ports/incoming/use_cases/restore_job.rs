use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::CallerIdentity;
use crate::modules::job::application::domain::Job;

use super::JobCommandError;

#[async_trait]
pub trait RestoreJobUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: CallerIdentity,
        job_id: Uuid,
    ) -> Result<Job, JobCommandError>;
}
