use actix_web::{get, web, Responder};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedCaller;
use crate::modules::job::application::domain::AlumniJobCount;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::failure::query_failure;

/// Alumni holding two or more active jobs
///
/// Alumni callers may only ask about their own profile.
#[utoipa::path(
    get,
    path = "/pekerjaan/filter/jobmoretwo/{alumni_id}",
    tag = "pekerjaan",
    params(("alumni_id" = Uuid, Path, description = "Alumni id")),
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Active job counts", body = inline(SuccessResponse<Vec<AlumniJobCount>>)),
        (status = 403, description = "Another alumni's profile", body = ErrorResponse),
        (status = 404, description = "Alumni not found", body = ErrorResponse),
        (status = 503, description = "Storage unavailable", body = ErrorResponse),
    )
)]
#[get("/pekerjaan/filter/jobmoretwo/{alumni_id}")]
pub async fn get_multi_job_alumni_handler(
    caller: AuthenticatedCaller,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .job
        .multi_job_alumni
        .execute(caller.into_inner(), path.into_inner())
        .await
    {
        Ok(counts) => ApiResponse::success(counts),
        Err(e) => query_failure(e, "count jobs per alumni"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::{CallerIdentity, Role};
    use crate::auth::application::domain::policies::{Action, PolicyViolation};
    use crate::modules::job::application::ports::incoming::use_cases::{
        GetMultiJobAlumniUseCase, JobQueryError,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::bearer_for;
    use crate::tests::support::http::send;
    use actix_web::{http::StatusCode, test::TestRequest};
    use async_trait::async_trait;

    struct MockMultiJob(Result<Vec<AlumniJobCount>, JobQueryError>);

    #[async_trait]
    impl GetMultiJobAlumniUseCase for MockMultiJob {
        async fn execute(
            &self,
            _caller: CallerIdentity,
            _alumni_id: Uuid,
        ) -> Result<Vec<AlumniJobCount>, JobQueryError> {
            self.0.clone()
        }
    }

    async fn get(result: Result<Vec<AlumniJobCount>, JobQueryError>) -> (StatusCode, serde_json::Value) {
        let state = TestAppStateBuilder::default()
            .with_multi_job_alumni(MockMultiJob(result))
            .build();
        let (_, token) = bearer_for(Role::Alumni);

        send(
            state,
            get_multi_job_alumni_handler,
            TestRequest::get()
                .uri(&format!("/pekerjaan/filter/jobmoretwo/{}", Uuid::new_v4()))
                .insert_header(("Authorization", token)),
        )
        .await
    }

    #[actix_web::test]
    async fn returns_counts() {
        let alumni_id = Uuid::new_v4();
        let (status, body) = get(Ok(vec![AlumniJobCount {
            alumni_id,
            alumni_name: "Siti Aminah".into(),
            count: 3,
        }]))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"][0]["count"], 3);
        assert_eq!(body["data"][0]["alumni_id"], alumni_id.to_string());
    }

    #[actix_web::test]
    async fn foreign_profile_is_403() {
        let (status, body) = get(Err(JobQueryError::Forbidden(PolicyViolation {
            role: Role::Alumni,
            action: Action::ViewAggregate,
        })))
        .await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"]["code"], "FORBIDDEN");
    }
}
