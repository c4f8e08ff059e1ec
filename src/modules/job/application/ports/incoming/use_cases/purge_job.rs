use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::CallerIdentity;
use crate::modules::job::application::domain::JobState;

use super::JobCommandError;

/// Permanently removes a trashed job.
#[async_trait]
pub trait PurgeJobUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: CallerIdentity,
        job_id: Uuid,
    ) -> Result<JobState, JobCommandError>;
}
