use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedCaller;
use crate::modules::file::application::domain::StoredFile;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::failure::file_failure;

/// List uploaded files, newest first
///
/// Admins see every file, alumni only their own.
#[utoipa::path(
    get,
    path = "/api/files",
    tag = "files",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "File metadata", body = inline(SuccessResponse<Vec<StoredFile>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 503, description = "Storage unavailable", body = ErrorResponse),
    )
)]
#[get("/api/files")]
pub async fn list_files_handler(
    caller: AuthenticatedCaller,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.file.list.execute(caller.into_inner()).await {
        Ok(files) => ApiResponse::success(files),
        Err(e) => file_failure(e, "list files"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::{CallerIdentity, Role};
    use crate::modules::file::application::ports::incoming::use_cases::{
        FileError, ListFilesUseCase,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::bearer_for;
    use crate::tests::support::fixtures::file_fixture;
    use crate::tests::support::http::send;
    use actix_web::{http::StatusCode, test::TestRequest};
    use async_trait::async_trait;

    struct OwnFiles;

    #[async_trait]
    impl ListFilesUseCase for OwnFiles {
        async fn execute(&self, caller: CallerIdentity) -> Result<Vec<StoredFile>, FileError> {
            Ok(vec![file_fixture(caller.user_id.value())])
        }
    }

    #[actix_web::test]
    async fn lists_files_of_caller() {
        let state = TestAppStateBuilder::default().with_list_files(OwnFiles).build();
        let (identity, token) = bearer_for(Role::Alumni);

        let (status, body) = send(
            state,
            list_files_handler,
            TestRequest::get()
                .uri("/api/files")
                .insert_header(("Authorization", token)),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"][0]["user_id"], identity.user_id.to_string());
    }
}
