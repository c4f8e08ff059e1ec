use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;
use utoipa::ToSchema;
use uuid::Uuid;

use super::upload_policy::UploadCategory;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct StoredFile {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Generated name on disk
    #[schema(example = "5b2f0f7e-9a55-4c4b-8f0e-3c1d2f4a6b7c.pdf")]
    pub file_name: String,
    #[schema(example = "ijazah.PDF")]
    pub original_name: String,
    pub file_path: String,
    pub file_size: u64,
    #[schema(example = "application/pdf")]
    pub file_type: String,
    pub uploaded_at: DateTime<Utc>,
}

/// Metadata for bytes that were just written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStoredFile {
    pub user_id: Uuid,
    pub file_name: String,
    pub original_name: String,
    pub file_path: String,
    pub file_size: u64,
    pub file_type: String,
}

/// A received upload, before policy checks.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub owner: Uuid,
    pub category: UploadCategory,
    pub original_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DeletedFile {
    pub id: Uuid,
    /// False when the metadata is gone but the bytes could not be removed
    pub storage_removed: bool,
}

/// `<uuid v4><.ext>` with the original extension lowercased. Extensions that
/// are not plain alphanumerics are dropped.
pub fn stored_name(original_name: &str) -> String {
    let extension = Path::new(original_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| format!(".{}", ext.to_ascii_lowercase()))
        .unwrap_or_default();

    format!("{}{}", Uuid::new_v4(), extension)
}
