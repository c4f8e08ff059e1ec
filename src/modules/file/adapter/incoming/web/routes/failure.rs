use actix_web::HttpResponse;
use tracing::{error, warn};

use crate::modules::file::application::domain::UploadRejected;
use crate::modules::file::application::ports::incoming::use_cases::FileError;
use crate::shared::api::{ApiResponse, FailureKind};

use super::multipart::MultipartFailure;

pub(super) fn rejected(err: &UploadRejected) -> HttpResponse {
    let code = match err {
        UploadRejected::MissingFile => "NO_FILE_UPLOADED",
        UploadRejected::FileTooLarge { .. } => "FILE_TOO_LARGE",
        UploadRejected::UnsupportedType(_) => "UNSUPPORTED_FILE_TYPE",
    };
    ApiResponse::bad_request(code, &err.to_string())
}

pub(super) fn multipart_failure(err: MultipartFailure) -> HttpResponse {
    match err {
        MultipartFailure::Rejected(e) => {
            warn!(error = %e, "Upload refused while streaming");
            rejected(&e)
        }
        MultipartFailure::Malformed(e) => ApiResponse::bad_request("VALIDATION_ERROR", &e),
    }
}

pub(super) fn file_failure(err: FileError, operation: &str) -> HttpResponse {
    match err {
        FileError::NotFound => ApiResponse::not_found("FILE_NOT_FOUND", "File not found"),
        FileError::UnknownOwner => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),
        FileError::Forbidden(e) => ApiResponse::forbidden("FORBIDDEN", &e.to_string()),
        FileError::Rejected(e) => rejected(&e),
        FileError::StorageFailed(e) => {
            error!(operation, error = %e, "File storage failed");
            ApiResponse::failure(
                FailureKind::Internal,
                "FILE_STORAGE_FAILED",
                "The file could not be stored",
            )
        }
        FileError::Unavailable(e) => {
            error!(operation, error = %e, "File metadata store timed out");
            ApiResponse::service_unavailable()
        }
        FileError::RepositoryError(e) => {
            error!(operation, error = %e, "File metadata store failed");
            ApiResponse::internal_error()
        }
    }
}
