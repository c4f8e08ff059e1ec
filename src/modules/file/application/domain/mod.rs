pub mod file;
pub mod upload_policy;

pub use file::{stored_name, DeletedFile, FileUpload, NewStoredFile, StoredFile};
pub use upload_policy::{UploadCategory, UploadPolicy, UploadRejected};
