mod check_alumni;
mod create_alumni;
mod delete_alumni;
mod dto;
mod get_alumni_list;
mod get_single_alumni;
mod update_alumni;

pub use check_alumni::{__path_check_alumni_handler, check_alumni_handler, CheckAlumniRequest};
pub use create_alumni::{__path_create_alumni_handler, create_alumni_handler};
pub use delete_alumni::{__path_delete_alumni_handler, delete_alumni_handler, DeletedAlumni};
pub use dto::{AlumniPayload, CreateAlumniRequest};
pub use get_alumni_list::{__path_get_alumni_list_handler, get_alumni_list_handler};
pub use get_single_alumni::{__path_get_single_alumni_handler, get_single_alumni_handler};
pub use update_alumni::{__path_update_alumni_handler, update_alumni_handler};
