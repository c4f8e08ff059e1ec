use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::CallerIdentity;
use crate::modules::job::application::domain::JobState;

use super::JobCommandError;

/// Moves an active job to the trash and reports the new state.
#[async_trait]
pub trait SoftDeleteJobUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: CallerIdentity,
        job_id: Uuid,
    ) -> Result<JobState, JobCommandError>;
}
