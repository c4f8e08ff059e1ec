use actix_web::{put, web, Responder};
use tracing::info;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedCaller;
use crate::modules::job::application::domain::Job;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::failure::command_failure;

/// Bring a trashed job back (admin)
#[utoipa::path(
    put,
    path = "/pekerjaan/filter/restore/{id}",
    tag = "pekerjaan",
    params(("id" = Uuid, Path, description = "Job id")),
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Job restored", body = inline(SuccessResponse<Job>)),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
        (status = 404, description = "Job not found", body = ErrorResponse),
        (status = 409, description = "Job is not in the trash", body = ErrorResponse),
        (status = 503, description = "Storage unavailable", body = ErrorResponse),
    )
)]
#[put("/pekerjaan/filter/restore/{id}")]
pub async fn restore_job_handler(
    caller: AuthenticatedCaller,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let caller = caller.into_inner();
    let user_id = caller.user_id;

    match data.job.restore.execute(caller, path.into_inner()).await {
        Ok(job) => {
            info!(job_id = %job.id, %user_id, "Job restored from trash");
            ApiResponse::success(job)
        }
        Err(e) => command_failure(e, "restore job"),
    }
}
