use actix_web::{get, web, Responder};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, PagedData, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedCaller;
use crate::modules::job::application::domain::job::{DEFAULT_SORT, SORTABLE_FIELDS};
use crate::modules::job::application::domain::Job;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::{ListParams, ListQuery};
use crate::AppState;

use super::failure::query_failure;

/// List active jobs of one alumni (admin)
#[utoipa::path(
    get,
    path = "/pekerjaan/alumni/{alumni_id}",
    tag = "pekerjaan",
    params(("alumni_id" = Uuid, Path, description = "Alumni id"), ListParams),
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Page of jobs", body = inline(SuccessResponse<PagedData<Job>>)),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
        (status = 404, description = "Alumni not found", body = ErrorResponse),
        (status = 503, description = "Storage unavailable", body = ErrorResponse),
    )
)]
#[get("/pekerjaan/alumni/{alumni_id}")]
pub async fn get_jobs_by_alumni_handler(
    caller: AuthenticatedCaller,
    path: web::Path<Uuid>,
    params: web::Query<ListParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = ListQuery::from_params(params.into_inner(), SORTABLE_FIELDS, DEFAULT_SORT);

    match data
        .job
        .get_by_alumni
        .execute(caller.into_inner(), path.into_inner(), query)
        .await
    {
        Ok(page) => ApiResponse::success(page),
        Err(e) => query_failure(e, "list jobs of alumni"),
    }
}
