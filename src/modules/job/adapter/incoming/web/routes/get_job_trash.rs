use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedCaller;
use crate::modules::job::application::domain::TrashEntry;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::failure::query_failure;

/// List trashed jobs
///
/// Admins see the whole trash, alumni only their own trashed jobs.
#[utoipa::path(
    get,
    path = "/pekerjaan/filter/trash",
    tag = "pekerjaan",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Trashed jobs", body = inline(SuccessResponse<Vec<TrashEntry>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 503, description = "Storage unavailable", body = ErrorResponse),
    )
)]
#[get("/pekerjaan/filter/trash")]
pub async fn get_job_trash_handler(
    caller: AuthenticatedCaller,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.job.trash.execute(caller.into_inner()).await {
        Ok(entries) => ApiResponse::success(entries),
        Err(e) => query_failure(e, "list job trash"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::{CallerIdentity, Role};
    use crate::modules::job::application::ports::incoming::use_cases::{
        GetJobTrashUseCase, JobQueryError,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::bearer_for;
    use crate::tests::support::http::send;
    use actix_web::{http::StatusCode, test::TestRequest};
    use async_trait::async_trait;
    use uuid::Uuid;

    struct MockTrash(Result<Vec<TrashEntry>, JobQueryError>);

    #[async_trait]
    impl GetJobTrashUseCase for MockTrash {
        async fn execute(&self, _caller: CallerIdentity) -> Result<Vec<TrashEntry>, JobQueryError> {
            self.0.clone()
        }
    }

    async fn get(result: Result<Vec<TrashEntry>, JobQueryError>) -> (StatusCode, serde_json::Value) {
        let state = TestAppStateBuilder::default()
            .with_job_trash(MockTrash(result))
            .build();
        let (_, token) = bearer_for(Role::Admin);

        send(
            state,
            get_job_trash_handler,
            TestRequest::get()
                .uri("/pekerjaan/filter/trash")
                .insert_header(("Authorization", token)),
        )
        .await
    }

    #[actix_web::test]
    async fn lists_entries() {
        let (status, body) = get(Ok(vec![TrashEntry {
            id: Uuid::new_v4(),
            alumni_id: Uuid::new_v4(),
            alumni_name: "Siti Aminah".into(),
            company_name: "PT Telkom Indonesia".into(),
            is_deleted: true,
        }]))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"][0]["is_deleted"], true);
        assert_eq!(body["data"][0]["alumni_name"], "Siti Aminah");
    }

    #[actix_web::test]
    async fn empty_trash_is_empty_array() {
        let (status, body) = get(Ok(vec![])).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], serde_json::json!([]));
    }

    #[actix_web::test]
    async fn storage_timeout_is_503() {
        let (status, _) = get(Err(JobQueryError::Unavailable("deadline".into()))).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }
}
