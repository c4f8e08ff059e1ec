use std::sync::Arc;

use crate::modules::job::application::ports::incoming::use_cases::{
    CreateJobUseCase, GetJobListUseCase, GetJobTrashUseCase, GetJobsByAlumniUseCase,
    GetJobsByRoleUseCase, GetMultiJobAlumniUseCase, GetSingleJobUseCase, PurgeJobUseCase,
    RestoreJobUseCase, SoftDeleteJobUseCase, UpdateJobUseCase,
};

#[derive(Clone)]
pub struct JobUseCases {
    pub get_list: Arc<dyn GetJobListUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleJobUseCase + Send + Sync>,
    pub get_by_alumni: Arc<dyn GetJobsByAlumniUseCase + Send + Sync>,
    pub get_by_role: Arc<dyn GetJobsByRoleUseCase + Send + Sync>,
    pub multi_job_alumni: Arc<dyn GetMultiJobAlumniUseCase + Send + Sync>,
    pub trash: Arc<dyn GetJobTrashUseCase + Send + Sync>,
    pub create: Arc<dyn CreateJobUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateJobUseCase + Send + Sync>,
    pub soft_delete: Arc<dyn SoftDeleteJobUseCase + Send + Sync>,
    pub restore: Arc<dyn RestoreJobUseCase + Send + Sync>,
    pub purge: Arc<dyn PurgeJobUseCase + Send + Sync>,
}
