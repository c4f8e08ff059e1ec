use async_trait::async_trait;

use crate::auth::application::domain::entities::CallerIdentity;
use crate::modules::job::application::domain::{Job, NewJob};

use super::JobCommandError;

#[async_trait]
pub trait CreateJobUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: CallerIdentity,
        job: NewJob,
    ) -> Result<Job, JobCommandError>;
}
