use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, PagedData, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedCaller;
use crate::modules::job::application::domain::job::{DEFAULT_SORT, SORTABLE_FIELDS};
use crate::modules::job::application::domain::Job;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::{ListParams, ListQuery};
use crate::AppState;

use super::failure::query_failure;

/// List active jobs
///
/// `search` matches company, position, industry or location.
#[utoipa::path(
    get,
    path = "/pekerjaan",
    tag = "pekerjaan",
    params(ListParams),
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Page of active jobs", body = inline(SuccessResponse<PagedData<Job>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 503, description = "Storage unavailable", body = ErrorResponse),
    )
)]
#[get("/pekerjaan")]
pub async fn get_job_list_handler(
    caller: AuthenticatedCaller,
    params: web::Query<ListParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = ListQuery::from_params(params.into_inner(), SORTABLE_FIELDS, DEFAULT_SORT);

    match data.job.get_list.execute(caller.into_inner(), query).await {
        Ok(page) => ApiResponse::success(page),
        Err(e) => query_failure(e, "list jobs"),
    }
}
