mod delete_file;
mod failure;
mod get_file;
mod list_files;
mod multipart;
mod upload_file;

pub use delete_file::{__path_delete_file_handler, delete_file_handler};
pub use get_file::{__path_get_file_handler, get_file_handler};
pub use list_files::{__path_list_files_handler, list_files_handler};
pub use upload_file::{
    __path_upload_certificate_handler, __path_upload_file_handler, __path_upload_photo_handler,
    upload_certificate_handler, upload_file_handler, upload_photo_handler, UploadForm,
};
