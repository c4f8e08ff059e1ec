use actix_web::{delete, web, Responder};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedCaller;
use crate::modules::file::application::domain::DeletedFile;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::failure::file_failure;

/// Delete a file
///
/// The metadata is always removed. `storage_removed` is false when the bytes
/// could not be deleted from disk.
#[utoipa::path(
    delete,
    path = "/api/files/{id}",
    tag = "files",
    params(("id" = Uuid, Path, description = "File id")),
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "File deleted", body = inline(SuccessResponse<DeletedFile>)),
        (status = 403, description = "Another user's file", body = ErrorResponse),
        (status = 404, description = "File not found", body = ErrorResponse),
        (status = 503, description = "Storage unavailable", body = ErrorResponse),
    )
)]
#[delete("/api/files/{id}")]
pub async fn delete_file_handler(
    caller: AuthenticatedCaller,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .file
        .delete
        .execute(caller.into_inner(), path.into_inner())
        .await
    {
        Ok(deleted) => ApiResponse::success(deleted),
        Err(e) => file_failure(e, "delete file"),
    }
}
