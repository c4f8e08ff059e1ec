use actix_multipart::{Field, Multipart, MultipartError};
use futures::TryStreamExt;

use crate::modules::file::application::domain::{
    FileUpload, UploadCategory, UploadPolicy, UploadRejected,
};

const FILE_FIELD: &str = "file";

#[derive(Debug, thiserror::Error)]
pub(super) enum MultipartFailure {
    #[error(transparent)]
    Rejected(#[from] UploadRejected),

    #[error("Malformed multipart body: {0}")]
    Malformed(String),
}

impl From<MultipartError> for MultipartFailure {
    fn from(err: MultipartError) -> Self {
        MultipartFailure::Malformed(err.to_string())
    }
}

/// Reads the `file` field into memory. The type is checked from the part
/// headers and the size while chunks arrive, so an oversized body is refused
/// without reading the rest.
pub(super) async fn read_upload(
    mut payload: Multipart,
    owner: uuid::Uuid,
    category: UploadCategory,
) -> Result<FileUpload, MultipartFailure> {
    while let Some(mut field) = payload.try_next().await? {
        if field.name() != Some(FILE_FIELD) {
            while field.try_next().await?.is_some() {}
            continue;
        }

        let original_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .unwrap_or("upload")
            .to_string();
        let content_type = field
            .content_type()
            .map(|mime| mime.essence_str().to_string())
            .unwrap_or_default();

        UploadPolicy::check_type(category, &content_type)?;
        let bytes = read_bounded(&mut field, category).await?;

        return Ok(FileUpload {
            owner,
            category,
            original_name,
            content_type,
            bytes,
        });
    }

    Err(UploadRejected::MissingFile.into())
}

async fn read_bounded(
    field: &mut Field,
    category: UploadCategory,
) -> Result<Vec<u8>, MultipartFailure> {
    let mut bytes = Vec::new();
    while let Some(chunk) = field.try_next().await? {
        UploadPolicy::check_size(category, (bytes.len() + chunk.len()) as u64)?;
        bytes.extend_from_slice(&chunk);
    }
    Ok(bytes)
}
