use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::CallerIdentity;
use crate::modules::job::application::domain::AlumniJobCount;

use super::JobQueryError;

/// Alumni holding more than one active job.
#[async_trait]
pub trait GetMultiJobAlumniUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: CallerIdentity,
        alumni_id: Uuid,
    ) -> Result<Vec<AlumniJobCount>, JobQueryError>;
}
