use actix_web::{delete, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedCaller;
use crate::modules::alumni::application::ports::incoming::use_cases::DeleteAlumniError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct DeletedAlumni {
    pub id: Uuid,
}

/// Delete an alumni profile and all of its jobs (admin)
#[utoipa::path(
    delete,
    path = "/alumni/{id}",
    tag = "alumni",
    params(("id" = Uuid, Path, description = "Alumni id")),
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Alumni deleted", body = inline(SuccessResponse<DeletedAlumni>)),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
        (status = 404, description = "Alumni not found", body = ErrorResponse),
        (status = 503, description = "Storage unavailable", body = ErrorResponse),
    )
)]
#[delete("/alumni/{id}")]
pub async fn delete_alumni_handler(
    caller: AuthenticatedCaller,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let alumni_id = path.into_inner();

    match data
        .alumni
        .delete
        .execute(caller.into_inner(), alumni_id)
        .await
    {
        Ok(()) => ApiResponse::success(DeletedAlumni { id: alumni_id }),

        Err(DeleteAlumniError::NotFound) => {
            ApiResponse::not_found("ALUMNI_NOT_FOUND", "Alumni not found")
        }

        Err(DeleteAlumniError::Forbidden(e)) => {
            ApiResponse::forbidden("FORBIDDEN", &e.to_string())
        }

        Err(DeleteAlumniError::Unavailable(e)) => {
            error!(%alumni_id, error = %e, "Alumni delete timed out");
            ApiResponse::service_unavailable()
        }

        Err(DeleteAlumniError::RepositoryError(e)) => {
            error!(%alumni_id, error = %e, "Failed to delete alumni");
            ApiResponse::internal_error()
        }
    }
}
