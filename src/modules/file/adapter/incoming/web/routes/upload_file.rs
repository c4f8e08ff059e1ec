use actix_multipart::Multipart;
use actix_web::{post, web, HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedCaller;
use crate::auth::application::domain::entities::CallerIdentity;
use crate::modules::file::application::domain::{StoredFile, UploadCategory};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::failure::{file_failure, multipart_failure};
use super::multipart::read_upload;

/// Multipart form with a single `file` part
#[derive(Serialize, ToSchema)]
pub struct UploadForm {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

async fn upload(
    data: &AppState,
    caller: CallerIdentity,
    owner: Uuid,
    category: UploadCategory,
    payload: Multipart,
) -> HttpResponse {
    let upload = match read_upload(payload, owner, category).await {
        Ok(upload) => upload,
        Err(e) => return multipart_failure(e),
    };

    match data.file.upload.execute(caller, upload).await {
        Ok(stored) => ApiResponse::created(stored),
        Err(e) => file_failure(e, category.as_str()),
    }
}

/// Upload a document or image for the caller
///
/// JPEG, PNG or PDF up to 10 MiB.
#[utoipa::path(
    post,
    path = "/api/files/upload",
    tag = "files",
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    security(("BearerAuth" = [])),
    responses(
        (status = 201, description = "File stored", body = inline(SuccessResponse<StoredFile>)),
        (status = 400, description = "Missing, oversized or unsupported file", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[post("/api/files/upload")]
pub async fn upload_file_handler(
    caller: AuthenticatedCaller,
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let caller = caller.into_inner();
    let owner = caller.user_id.value();
    upload(&data, caller, owner, UploadCategory::General, payload).await
}

/// Upload a profile photo for a user
///
/// JPEG or PNG up to 1 MiB. Alumni may only upload for themselves.
#[utoipa::path(
    post,
    path = "/api/files/upload/photo/{user_id}",
    tag = "files",
    params(("user_id" = Uuid, Path, description = "Owning user")),
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    security(("BearerAuth" = [])),
    responses(
        (status = 201, description = "Photo stored", body = inline(SuccessResponse<StoredFile>)),
        (status = 400, description = "Missing, oversized or unsupported file", body = ErrorResponse),
        (status = 403, description = "Another user's files", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
#[post("/api/files/upload/photo/{user_id}")]
pub async fn upload_photo_handler(
    caller: AuthenticatedCaller,
    path: web::Path<Uuid>,
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    upload(
        &data,
        caller.into_inner(),
        path.into_inner(),
        UploadCategory::Photo,
        payload,
    )
    .await
}

/// Upload a certificate for a user
///
/// PDF up to 2 MiB. Alumni may only upload for themselves.
#[utoipa::path(
    post,
    path = "/api/files/upload/certificate/{user_id}",
    tag = "files",
    params(("user_id" = Uuid, Path, description = "Owning user")),
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    security(("BearerAuth" = [])),
    responses(
        (status = 201, description = "Certificate stored", body = inline(SuccessResponse<StoredFile>)),
        (status = 400, description = "Missing, oversized or unsupported file", body = ErrorResponse),
        (status = 403, description = "Another user's files", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
#[post("/api/files/upload/certificate/{user_id}")]
pub async fn upload_certificate_handler(
    caller: AuthenticatedCaller,
    path: web::Path<Uuid>,
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    upload(
        &data,
        caller.into_inner(),
        path.into_inner(),
        UploadCategory::Certificate,
        payload,
    )
    .await
}
