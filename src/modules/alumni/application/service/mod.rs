pub mod alumni_provisioner_service;
pub mod check_alumni_service;
pub mod create_alumni_service;
pub mod delete_alumni_service;
pub mod get_alumni_list_service;
pub mod get_single_alumni_service;
pub mod update_alumni_service;

pub use alumni_provisioner_service::AlumniProvisionerService;
pub use check_alumni_service::CheckAlumniService;
pub use create_alumni_service::CreateAlumniService;
pub use delete_alumni_service::DeleteAlumniService;
pub use get_alumni_list_service::GetAlumniListService;
pub use get_single_alumni_service::GetSingleAlumniService;
pub use update_alumni_service::UpdateAlumniService;
