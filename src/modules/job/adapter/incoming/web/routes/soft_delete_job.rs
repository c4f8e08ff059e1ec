use actix_web::{delete, web, Responder};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedCaller;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::dto::JobStateChange;
use super::failure::command_failure;

/// Move a job to the trash
///
/// The record stays restorable until an admin purges it.
#[utoipa::path(
    delete,
    path = "/pekerjaan/{id}",
    tag = "pekerjaan",
    params(("id" = Uuid, Path, description = "Job id")),
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Job trashed", body = inline(SuccessResponse<JobStateChange>)),
        (status = 403, description = "Not the owner", body = ErrorResponse),
        (status = 404, description = "Job absent or already trashed", body = ErrorResponse),
        (status = 503, description = "Storage unavailable", body = ErrorResponse),
    )
)]
#[delete("/pekerjaan/{id}")]
pub async fn soft_delete_job_handler(
    caller: AuthenticatedCaller,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.job.soft_delete.execute(caller.into_inner(), id).await {
        Ok(state) => ApiResponse::success(JobStateChange { id, state }),
        Err(e) => command_failure(e, "trash job"),
    }
}
