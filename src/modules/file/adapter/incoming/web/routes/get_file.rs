use actix_web::{get, web, Responder};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedCaller;
use crate::modules::file::application::domain::StoredFile;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::failure::file_failure;

#[utoipa::path(
    get,
    path = "/api/files/{id}",
    tag = "files",
    params(("id" = Uuid, Path, description = "File id")),
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "File metadata", body = inline(SuccessResponse<StoredFile>)),
        (status = 403, description = "Another user's file", body = ErrorResponse),
        (status = 404, description = "File not found", body = ErrorResponse),
        (status = 503, description = "Storage unavailable", body = ErrorResponse),
    )
)]
#[get("/api/files/{id}")]
pub async fn get_file_handler(
    caller: AuthenticatedCaller,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .file
        .get
        .execute(caller.into_inner(), path.into_inner())
        .await
    {
        Ok(file) => ApiResponse::success(file),
        Err(e) => file_failure(e, "get file"),
    }
}
