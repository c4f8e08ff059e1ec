mod create_job;
mod dto;
mod failure;
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

pub use create_job::{__path_create_job_handler, create_job_handler};
pub use dto::{CreateJobRequest, JobPayload, JobStateChange};
pub use get_job_list::{__path_get_job_list_handler, get_job_list_handler};
pub use get_job_trash::{__path_get_job_trash_handler, get_job_trash_handler};
pub use get_jobs_by_alumni::{__path_get_jobs_by_alumni_handler, get_jobs_by_alumni_handler};
pub use get_jobs_by_role::{__path_get_jobs_by_role_handler, get_jobs_by_role_handler};
pub use get_multi_job_alumni::{__path_get_multi_job_alumni_handler, get_multi_job_alumni_handler};
pub use get_single_job::{__path_get_single_job_handler, get_single_job_handler};
pub use purge_job::{__path_purge_job_handler, purge_job_handler};
pub use restore_job::{__path_restore_job_handler, restore_job_handler};
pub use soft_delete_job::{__path_soft_delete_job_handler, soft_delete_job_handler};
pub use update_job::{__path_update_job_handler, update_job_handler};
