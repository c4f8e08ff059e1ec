mod delete_file;
mod errors;
mod get_file;
mod list_files;
mod upload_file;

pub use delete_file::DeleteFileUseCase;
pub use errors::FileError;
pub use get_file::GetFileUseCase;
pub use list_files::ListFilesUseCase;
pub use upload_file::UploadFileUseCase;
