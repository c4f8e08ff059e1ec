use actix_web::{post, web, Either, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::alumni::application::domain::AlumniCheck;
use crate::modules::alumni::application::ports::incoming::use_cases::CheckAlumniError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CheckAlumniRequest {
    #[schema(example = "434221001")]
    pub nim: String,
}

/// Check whether a NIM belongs to a registered alumni
///
/// Public endpoint for partner systems. The path key must match the
/// configured `API_KEY`. Accepts a JSON or form-encoded body.
#[utoipa::path(
    post,
    path = "/check/{key}",
    tag = "alumni",
    params(("key" = String, Path, description = "Shared API key")),
    request_body = CheckAlumniRequest,
    responses(
        (status = 200, description = "Lookup result", body = inline(SuccessResponse<AlumniCheck>)),
        (status = 400, description = "NIM missing", body = ErrorResponse),
        (status = 401, description = "Invalid API key", body = ErrorResponse),
        (status = 503, description = "Storage unavailable", body = ErrorResponse),
    )
)]
#[post("/check/{key}")]
pub async fn check_alumni_handler(
    path: web::Path<String>,
    body: Either<web::Json<CheckAlumniRequest>, web::Form<CheckAlumniRequest>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let key = path.into_inner();
    let nim = match body {
        Either::Left(json) => json.into_inner().nim,
        Either::Right(form) => form.into_inner().nim,
    };

    match data.alumni.check.execute(&key, &nim).await {
        Ok(check) => ApiResponse::success(check),

        Err(CheckAlumniError::InvalidKey) => {
            warn!("Alumni check with invalid API key");
            ApiResponse::unauthorized("INVALID_API_KEY", "Invalid API key")
        }

        Err(e @ CheckAlumniError::EmptyNim) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }

        Err(CheckAlumniError::Unavailable(e)) => {
            error!(error = %e, "Alumni check timed out");
            ApiResponse::service_unavailable()
        }

        Err(CheckAlumniError::RepositoryError(e)) => {
            error!(error = %e, "Alumni check failed");
            ApiResponse::internal_error()
        }
    }
}
