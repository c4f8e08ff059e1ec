use actix_web::HttpResponse;
use tracing::{error, warn};

use crate::modules::job::application::ports::incoming::use_cases::{
    JobCommandError, JobQueryError,
};
use crate::shared::api::ApiResponse;

pub(super) fn job_not_found() -> HttpResponse {
    ApiResponse::not_found("JOB_NOT_FOUND", "Job not found")
}

fn alumni_not_found() -> HttpResponse {
    ApiResponse::not_found("ALUMNI_NOT_FOUND", "Alumni not found")
}

pub(super) fn query_failure(err: JobQueryError, operation: &str) -> HttpResponse {
    match err {
        JobQueryError::NotFound => job_not_found(),
        JobQueryError::AlumniNotFound => alumni_not_found(),
        JobQueryError::Forbidden(e) => ApiResponse::forbidden("FORBIDDEN", &e.to_string()),
        JobQueryError::Unavailable(e) => {
            error!(operation, error = %e, "Job query timed out");
            ApiResponse::service_unavailable()
        }
        JobQueryError::RepositoryError(e) => {
            error!(operation, error = %e, "Job query failed");
            ApiResponse::internal_error()
        }
    }
}

pub(super) fn command_failure(err: JobCommandError, operation: &str) -> HttpResponse {
    match err {
        JobCommandError::NotFound => job_not_found(),
        JobCommandError::AlumniNotFound => alumni_not_found(),
        JobCommandError::Forbidden(e) => ApiResponse::forbidden("FORBIDDEN", &e.to_string()),
        JobCommandError::Validation(e) => {
            warn!(operation, error = %e, "Invalid job payload");
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }
        e @ JobCommandError::NotTrashed => {
            ApiResponse::conflict("JOB_NOT_TRASHED", &e.to_string())
        }
        JobCommandError::Unavailable(e) => {
            error!(operation, error = %e, "Job write timed out");
            ApiResponse::service_unavailable()
        }
        JobCommandError::RepositoryError(e) => {
            error!(operation, error = %e, "Job write failed");
            ApiResponse::internal_error()
        }
    }
}
