pub mod delete_file_service;
pub mod get_file_service;
pub mod list_files_service;
pub mod upload_file_service;

pub use delete_file_service::DeleteFileService;
pub use get_file_service::GetFileService;
pub use list_files_service::ListFilesService;
pub use upload_file_service::UploadFileService;
