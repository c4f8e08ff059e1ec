use actix_web::{put, web, Responder};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedCaller;
use crate::modules::alumni::application::domain::Alumni;
use crate::modules::alumni::application::ports::incoming::use_cases::UpdateAlumniError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::dto::AlumniPayload;

/// Replace an alumni profile's editable fields (admin)
#[utoipa::path(
    put,
    path = "/alumni/{id}",
    tag = "alumni",
    params(("id" = Uuid, Path, description = "Alumni id")),
    request_body = AlumniPayload,
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Alumni updated", body = inline(SuccessResponse<Alumni>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
        (status = 404, description = "Alumni not found", body = ErrorResponse),
        (status = 409, description = "NIM already registered", body = ErrorResponse),
        (status = 503, description = "Storage unavailable", body = ErrorResponse),
    )
)]
#[put("/alumni/{id}")]
pub async fn update_alumni_handler(
    caller: AuthenticatedCaller,
    path: web::Path<Uuid>,
    req: web::Json<AlumniPayload>,
    data: web::Data<AppState>,
) -> impl Responder {
    let alumni_id = path.into_inner();

    match data
        .alumni
        .update
        .execute(caller.into_inner(), alumni_id, req.into_inner().into())
        .await
    {
        Ok(alumni) => {
            info!(%alumni_id, "Alumni profile updated");
            ApiResponse::success(alumni)
        }

        Err(UpdateAlumniError::NotFound) => {
            ApiResponse::not_found("ALUMNI_NOT_FOUND", "Alumni not found")
        }

        Err(UpdateAlumniError::Forbidden(e)) => {
            ApiResponse::forbidden("FORBIDDEN", &e.to_string())
        }

        Err(UpdateAlumniError::Validation(e)) => {
            warn!(%alumni_id, error = %e, "Invalid alumni payload");
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }

        Err(e @ UpdateAlumniError::DuplicateNim) => {
            ApiResponse::conflict("NIM_ALREADY_EXISTS", &e.to_string())
        }

        Err(UpdateAlumniError::Unavailable(e)) => {
            error!(%alumni_id, error = %e, "Alumni update timed out");
            ApiResponse::service_unavailable()
        }

        Err(UpdateAlumniError::RepositoryError(e)) => {
            error!(%alumni_id, error = %e, "Failed to update alumni");
            ApiResponse::internal_error()
        }
    }
}
