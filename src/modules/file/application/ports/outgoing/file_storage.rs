use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FileStorageError {
    #[error("Invalid file name: {0}")]
    InvalidName(String),

    #[error("I/O error: {0}")]
    Io(String),
}

/// Where uploaded bytes are kept.
#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Writes the bytes and returns the path they can be found under.
    async fn save(&self, file_name: &str, bytes: Vec<u8>) -> Result<String, FileStorageError>;

    async fn remove(&self, path: &str) -> Result<(), FileStorageError>;
}

#[cfg(test)]
mockall::mock! {
    pub Storage {}

    #[async_trait]
    impl FileStorage for Storage {
        async fn save(&self, file_name: &str, bytes: Vec<u8>) -> Result<String, FileStorageError>;
        async fn remove(&self, path: &str) -> Result<(), FileStorageError>;
    }
}
