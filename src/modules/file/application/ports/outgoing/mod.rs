pub mod file_repository;
pub mod file_storage;

pub use file_repository::{FileRepository, FileRepositoryError};
pub use file_storage::{FileStorage, FileStorageError};

#[cfg(test)]
pub use file_repository::MockFileRepo;
#[cfg(test)]
pub use file_storage::MockStorage;
