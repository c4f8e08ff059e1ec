use serde::Serialize;
use utoipa::ToSchema;

const MIB: u64 = 1024 * 1024;

const IMAGE_TYPES: &[&str] = &["image/jpeg", "image/jpg", "image/png"];
const GENERAL_TYPES: &[&str] = &["image/jpeg", "image/jpg", "image/png", "application/pdf"];
const CERTIFICATE_TYPES: &[&str] = &["application/pdf"];

/// What an upload is for. Each category carries its own size and type limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UploadCategory {
    General,
    Photo,
    Certificate,
}

impl UploadCategory {
    pub fn max_bytes(&self) -> u64 {
        match self {
            UploadCategory::General => 10 * MIB,
            UploadCategory::Photo => MIB,
            UploadCategory::Certificate => 2 * MIB,
        }
    }

    pub fn allowed_types(&self) -> &'static [&'static str] {
        match self {
            UploadCategory::General => GENERAL_TYPES,
            UploadCategory::Photo => IMAGE_TYPES,
            UploadCategory::Certificate => CERTIFICATE_TYPES,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UploadCategory::General => "general",
            UploadCategory::Photo => "photo",
            UploadCategory::Certificate => "certificate",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadRejected {
    #[error("No file in the `file` field")]
    MissingFile,

    #[error("File exceeds the {} MiB limit", .limit / MIB)]
    FileTooLarge { limit: u64 },

    #[error("File type {0} is not allowed")]
    UnsupportedType(String),
}

pub struct UploadPolicy;

impl UploadPolicy {
    /// Type check alone, so a stream can be refused before its body is read.
    pub fn check_type(category: UploadCategory, mime: &str) -> Result<(), UploadRejected> {
        let mime = mime.trim().to_ascii_lowercase();
        if category.allowed_types().contains(&mime.as_str()) {
            Ok(())
        } else {
            Err(UploadRejected::UnsupportedType(mime))
        }
    }

    pub fn check_size(category: UploadCategory, size: u64) -> Result<(), UploadRejected> {
        if size > category.max_bytes() {
            return Err(UploadRejected::FileTooLarge {
                limit: category.max_bytes(),
            });
        }
        Ok(())
    }

    pub fn check(category: UploadCategory, size: u64, mime: &str) -> Result<(), UploadRejected> {
        if size == 0 {
            return Err(UploadRejected::MissingFile);
        }
        Self::check_size(category, size)?;
        Self::check_type(category, mime)
    }
}
