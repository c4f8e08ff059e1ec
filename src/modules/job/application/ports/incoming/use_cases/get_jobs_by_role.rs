use async_trait::async_trait;

use crate::auth::application::domain::entities::CallerIdentity;
use crate::modules::job::application::domain::Job;
use crate::shared::pagination::{ListQuery, PageResult};

use super::JobQueryError;

/// Active jobs narrowed by the caller's role.
#[async_trait]
pub trait GetJobsByRoleUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: CallerIdentity,
        query: ListQuery,
    ) -> Result<PageResult<Job>, JobQueryError>;
}
