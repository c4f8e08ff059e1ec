use actix_web::{get, web, Responder};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedCaller;
use crate::modules::job::application::domain::Job;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::failure::query_failure;

/// Get one active job
#[utoipa::path(
    get,
    path = "/pekerjaan/{id}",
    tag = "pekerjaan",
    params(("id" = Uuid, Path, description = "Job id")),
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Job found", body = inline(SuccessResponse<Job>)),
        (status = 404, description = "Job absent or in the trash", body = ErrorResponse),
        (status = 503, description = "Storage unavailable", body = ErrorResponse),
    )
)]
#[get("/pekerjaan/{id}")]
pub async fn get_single_job_handler(
    caller: AuthenticatedCaller,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .job
        .get_single
        .execute(caller.into_inner(), path.into_inner())
        .await
    {
        Ok(job) => ApiResponse::success(job),
        Err(e) => query_failure(e, "get job"),
    }
}
