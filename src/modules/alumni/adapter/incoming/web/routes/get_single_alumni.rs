use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedCaller;
use crate::modules::alumni::application::domain::Alumni;
use crate::modules::alumni::application::ports::incoming::use_cases::GetSingleAlumniError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/alumni/{id}",
    tag = "alumni",
    params(("id" = Uuid, Path, description = "Alumni id")),
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Alumni profile", body = inline(SuccessResponse<Alumni>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Alumni not found", body = ErrorResponse),
        (status = 503, description = "Storage unavailable", body = ErrorResponse),
    )
)]
#[get("/alumni/{id}")]
pub async fn get_single_alumni_handler(
    caller: AuthenticatedCaller,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let alumni_id = path.into_inner();

    match data
        .alumni
        .get_single
        .execute(caller.into_inner(), alumni_id)
        .await
    {
        Ok(alumni) => ApiResponse::success(alumni),

        Err(GetSingleAlumniError::NotFound) => {
            ApiResponse::not_found("ALUMNI_NOT_FOUND", "Alumni not found")
        }

        Err(GetSingleAlumniError::Forbidden(e)) => {
            ApiResponse::forbidden("FORBIDDEN", &e.to_string())
        }

        Err(GetSingleAlumniError::Unavailable(e)) => {
            error!(%alumni_id, error = %e, "Alumni lookup timed out");
            ApiResponse::service_unavailable()
        }

        Err(GetSingleAlumniError::RepositoryError(e)) => {
            error!(%alumni_id, error = %e, "Failed to load alumni");
            ApiResponse::internal_error()
        }
    }
}
