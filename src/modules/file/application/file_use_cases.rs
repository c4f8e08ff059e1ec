use std::sync::Arc;

use crate::modules::file::application::ports::incoming::use_cases::{
    DeleteFileUseCase, GetFileUseCase, ListFilesUseCase, UploadFileUseCase,
};

#[derive(Clone)]
pub struct FileUseCases {
    pub upload: Arc<dyn UploadFileUseCase + Send + Sync>,
    pub list: Arc<dyn ListFilesUseCase + Send + Sync>,
    pub get: Arc<dyn GetFileUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteFileUseCase + Send + Sync>,
}
