use actix_web::{post, web, Responder};
use tracing::info;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedCaller;
use crate::modules::job::application::domain::Job;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::dto::CreateJobRequest;
use super::failure::command_failure;

/// Create a job
///
/// Admins may create jobs for any alumni, alumni only for their own profile.
#[utoipa::path(
    post,
    path = "/pekerjaan",
    tag = "pekerjaan",
    request_body = CreateJobRequest,
    security(("BearerAuth" = [])),
    responses(
        (status = 201, description = "Job created", body = inline(SuccessResponse<Job>)),
        (
            status = 400,
            description = "Validation error",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "VALIDATION_ERROR", "message": "company_name is required" }
            })
        ),
        (status = 403, description = "Alumni creating for another profile", body = ErrorResponse),
        (status = 404, description = "Alumni not found", body = ErrorResponse),
        (status = 503, description = "Storage unavailable", body = ErrorResponse),
    )
)]
#[post("/pekerjaan")]
pub async fn create_job_handler(
    caller: AuthenticatedCaller,
    req: web::Json<CreateJobRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .job
        .create
        .execute(caller.into_inner(), req.into_inner().into())
        .await
    {
        Ok(job) => {
            info!(job_id = %job.id, "Job record created");
            ApiResponse::created(job)
        }
        Err(e) => command_failure(e, "create job"),
    }
}
