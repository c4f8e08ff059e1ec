use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, PagedData, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedCaller;
use crate::modules::alumni::application::domain::alumni::{DEFAULT_SORT, SORTABLE_FIELDS};
use crate::modules::alumni::application::domain::Alumni;
use crate::modules::alumni::application::ports::incoming::use_cases::GetAlumniListError;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::{ListParams, ListQuery};
use crate::AppState;

/// List alumni
///
/// `search` matches name, NIM or major. Sortable by `created_at`, `name`,
/// `nim`, `major`, `cohort_year` and `graduation_year`.
#[utoipa::path(
    get,
    path = "/alumni",
    tag = "alumni",
    params(ListParams),
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Page of alumni", body = inline(SuccessResponse<PagedData<Alumni>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 503, description = "Storage unavailable", body = ErrorResponse),
    )
)]
#[get("/alumni")]
pub async fn get_alumni_list_handler(
    caller: AuthenticatedCaller,
    params: web::Query<ListParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = ListQuery::from_params(params.into_inner(), SORTABLE_FIELDS, DEFAULT_SORT);

    match data.alumni.get_list.execute(caller.into_inner(), query).await {
        Ok(page) => ApiResponse::success(page),

        Err(GetAlumniListError::Forbidden(e)) => {
            ApiResponse::forbidden("FORBIDDEN", &e.to_string())
        }

        Err(GetAlumniListError::Unavailable(e)) => {
            error!(error = %e, "Alumni listing timed out");
            ApiResponse::service_unavailable()
        }

        Err(GetAlumniListError::RepositoryError(e)) => {
            error!(error = %e, "Failed to list alumni");
            ApiResponse::internal_error()
        }
    }
}
