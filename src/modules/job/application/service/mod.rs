mod job_access;

pub mod create_job_service;
pub mod get_job_list_service;
pub mod get_job_trash_service;
pub mod get_jobs_by_alumni_service;
pub mod get_jobs_by_role_service;
pub mod get_multi_job_alumni_service;
pub mod get_single_job_service;
pub mod purge_job_service;
pub mod restore_job_service;
pub mod soft_delete_job_service;
pub mod update_job_service;

pub use create_job_service::CreateJobService;
pub use get_job_list_service::GetJobListService;
pub use get_job_trash_service::GetJobTrashService;
pub use get_jobs_by_alumni_service::GetJobsByAlumniService;
pub use get_jobs_by_role_service::GetJobsByRoleService;
pub use get_multi_job_alumni_service::GetMultiJobAlumniService;
pub use get_single_job_service::GetSingleJobService;
pub use purge_job_service::PurgeJobService;
pub use restore_job_service::RestoreJobService;
pub use soft_delete_job_service::SoftDeleteJobService;
pub use update_job_service::UpdateJobService;
