mod check_alumni;
mod create_alumni;
mod delete_alumni;
mod get_alumni_list;
mod get_single_alumni;
mod update_alumni;

pub use check_alumni::{CheckAlumniError, CheckAlumniUseCase};
pub use create_alumni::{CreateAlumniError, CreateAlumniUseCase};
pub use delete_alumni::{DeleteAlumniError, DeleteAlumniUseCase};
pub use get_alumni_list::{GetAlumniListError, GetAlumniListUseCase};
pub use get_single_alumni::{GetSingleAlumniError, GetSingleAlumniUseCase};
pub use update_alumni::{UpdateAlumniError, UpdateAlumniUseCase};
