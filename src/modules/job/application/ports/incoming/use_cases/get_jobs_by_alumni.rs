use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::CallerIdentity;
use crate::modules::job::application::domain::Job;
use crate::shared::pagination::{ListQuery, PageResult};

use super::JobQueryError;

/// Active jobs of one alumni. Unknown alumni answers `AlumniNotFound`.
#[async_trait]
pub trait GetJobsByAlumniUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: CallerIdentity,
        alumni_id: Uuid,
        query: ListQuery,
    ) -> Result<PageResult<Job>, JobQueryError>;
}
