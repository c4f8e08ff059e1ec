use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::CallerIdentity;
use crate::modules::job::application::domain::{Job, JobChanges};

use super::JobCommandError;

#[async_trait]
pub trait UpdateJobUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: CallerIdentity,
        job_id: Uuid,
        changes: JobChanges,
    ) -> Result<Job, JobCommandError>;
}
