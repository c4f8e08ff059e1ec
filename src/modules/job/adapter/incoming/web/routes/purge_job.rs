use actix_web::{delete, web, Responder};
use tracing::info;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedCaller;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::dto::JobStateChange;
use super::failure::command_failure;

/// Permanently remove a trashed job (admin)
///
/// Only jobs already in the trash can be purged.
#[utoipa::path(
    delete,
    path = "/pekerjaan/filter/delete/{id}",
    tag = "pekerjaan",
    params(("id" = Uuid, Path, description = "Job id")),
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Job purged", body = inline(SuccessResponse<JobStateChange>)),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
        (status = 404, description = "Job not found", body = ErrorResponse),
        (status = 409, description = "Job is not in the trash", body = ErrorResponse),
        (status = 503, description = "Storage unavailable", body = ErrorResponse),
    )
)]
#[delete("/pekerjaan/filter/delete/{id}")]
pub async fn purge_job_handler(
    caller: AuthenticatedCaller,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let caller = caller.into_inner();
    let user_id = caller.user_id;
    let id = path.into_inner();

    match data.job.purge.execute(caller, id).await {
        Ok(state) => {
            info!(job_id = %id, %user_id, "Job purged");
            ApiResponse::success(JobStateChange { id, state })
        }
        Err(e) => command_failure(e, "purge job"),
    }
}
