use actix_web::{put, web, Responder};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedCaller;
use crate::modules::job::application::domain::Job;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::dto::JobPayload;
use super::failure::command_failure;

/// Replace an active job's fields
#[utoipa::path(
    put,
    path = "/pekerjaan/{id}",
    tag = "pekerjaan",
    params(("id" = Uuid, Path, description = "Job id")),
    request_body = JobPayload,
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Job updated", body = inline(SuccessResponse<Job>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 403, description = "Not the owner", body = ErrorResponse),
        (status = 404, description = "Job absent or in the trash", body = ErrorResponse),
        (status = 503, description = "Storage unavailable", body = ErrorResponse),
    )
)]
#[put("/pekerjaan/{id}")]
pub async fn update_job_handler(
    caller: AuthenticatedCaller,
    path: web::Path<Uuid>,
    req: web::Json<JobPayload>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .job
        .update
        .execute(caller.into_inner(), path.into_inner(), req.into_inner().into())
        .await
    {
        Ok(job) => ApiResponse::success(job),
        Err(e) => command_failure(e, "update job"),
    }
}
