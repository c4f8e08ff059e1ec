use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

use crate::modules::file::application::ports::outgoing::{FileStorage, FileStorageError};

pub const DEFAULT_UPLOAD_DIR: &str = "./uploads";

/// Keeps uploads as plain files under one directory.
#[derive(Clone, Debug)]
pub struct LocalFileStorage {
    root: PathBuf,
}

impl LocalFileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `UPLOAD_DIR`, or `./uploads` when unset.
    pub fn from_env() -> Self {
        let root = std::env::var("UPLOAD_DIR")
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_UPLOAD_DIR.to_string());
        Self::new(root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn single_component(file_name: &str) -> bool {
    let mut components = Path::new(file_name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

#[async_trait]
impl FileStorage for LocalFileStorage {
    async fn save(&self, file_name: &str, bytes: Vec<u8>) -> Result<String, FileStorageError> {
        if !single_component(file_name) {
            return Err(FileStorageError::InvalidName(file_name.to_string()));
        }

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| FileStorageError::Io(e.to_string()))?;

        let path = self.root.join(file_name);
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| FileStorageError::Io(e.to_string()))?;

        debug!(path = %path.display(), "Upload written");
        Ok(path.to_string_lossy().into_owned())
    }

    async fn remove(&self, path: &str) -> Result<(), FileStorageError> {
        let target = Path::new(path);
        if !target.starts_with(&self.root) {
            return Err(FileStorageError::InvalidName(path.to_string()));
        }

        tokio::fs::remove_file(target)
            .await
            .map_err(|e| FileStorageError::Io(e.to_string()))
    }
}
