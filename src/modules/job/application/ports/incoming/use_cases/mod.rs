mod create_job;
mod errors;
mod get_job_list;
mod get_job_trash;
mod get_jobs_by_alumni;
mod get_jobs_by_role;
mod get_multi_job_alumni;
mod get_single_job;
mod purge_job;
mod restore_job;
mod soft_delete_job;
mod update_job;

pub use create_job::CreateJobUseCase;
pub use errors::{JobCommandError, JobQueryError};
pub use get_job_list::GetJobListUseCase;
pub use get_job_trash::GetJobTrashUseCase;
pub use get_jobs_by_alumni::GetJobsByAlumniUseCase;
pub use get_jobs_by_role::GetJobsByRoleUseCase;
pub use get_multi_job_alumni::GetMultiJobAlumniUseCase;
pub use get_single_job::GetSingleJobUseCase;
pub use purge_job::PurgeJobUseCase;
pub use restore_job::RestoreJobUseCase;
pub use soft_delete_job::SoftDeleteJobUseCase;
pub use update_job::UpdateJobUseCase;
