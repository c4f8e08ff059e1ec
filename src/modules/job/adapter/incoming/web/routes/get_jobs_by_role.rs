use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, PagedData, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedCaller;
use crate::modules::job::application::domain::job::{DEFAULT_SORT, SORTABLE_FIELDS};
use crate::modules::job::application::domain::Job;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::{ListParams, ListQuery};
use crate::AppState;

use super::failure::query_failure;

/// List jobs visible to the caller's role
///
/// Admins see every active job, alumni only those on their own profile.
#[utoipa::path(
    get,
    path = "/pekerjaan/filter/getbyrole",
    tag = "pekerjaan",
    params(ListParams),
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Page of jobs", body = inline(SuccessResponse<PagedData<Job>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 503, description = "Storage unavailable", body = ErrorResponse),
    )
)]
#[get("/pekerjaan/filter/getbyrole")]
pub async fn get_jobs_by_role_handler(
    caller: AuthenticatedCaller,
    params: web::Query<ListParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = ListQuery::from_params(params.into_inner(), SORTABLE_FIELDS, DEFAULT_SORT);

    match data.job.get_by_role.execute(caller.into_inner(), query).await {
        Ok(page) => ApiResponse::success(page),
        Err(e) => query_failure(e, "list jobs by role"),
    }
}
