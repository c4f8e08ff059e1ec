use actix_web::{post, web, Responder};
use tracing::{error, info, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedCaller;
use crate::modules::alumni::application::domain::{Alumni, NewAlumni};
use crate::modules::alumni::application::ports::incoming::use_cases::CreateAlumniError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::dto::CreateAlumniRequest;

/// Create an alumni profile (admin)
#[utoipa::path(
    post,
    path = "/alumni",
    tag = "alumni",
    request_body = CreateAlumniRequest,
    security(("BearerAuth" = [])),
    responses(
        (status = 201, description = "Alumni created", body = inline(SuccessResponse<Alumni>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
        (status = 404, description = "Linked account does not exist", body = ErrorResponse),
        (status = 409, description = "NIM or account already used", body = ErrorResponse),
        (status = 503, description = "Storage unavailable", body = ErrorResponse),
    )
)]
#[post("/alumni")]
pub async fn create_alumni_handler(
    caller: AuthenticatedCaller,
    req: web::Json<CreateAlumniRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let input = NewAlumni {
        user_id: req.user_id,
        fields: req.fields.into(),
    };

    match data.alumni.create.execute(caller.into_inner(), input).await {
        Ok(alumni) => {
            info!(alumni_id = %alumni.id, "Alumni profile created");
            ApiResponse::created(alumni)
        }

        Err(CreateAlumniError::Forbidden(e)) => {
            ApiResponse::forbidden("FORBIDDEN", &e.to_string())
        }

        Err(CreateAlumniError::Validation(e)) => {
            warn!(error = %e, "Invalid alumni payload");
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }

        Err(e @ CreateAlumniError::DuplicateNim) => {
            ApiResponse::conflict("NIM_ALREADY_EXISTS", &e.to_string())
        }

        Err(e @ CreateAlumniError::DuplicateUser) => {
            ApiResponse::conflict("USER_ALREADY_LINKED", &e.to_string())
        }

        Err(e @ CreateAlumniError::UnknownUser) => {
            ApiResponse::not_found("USER_NOT_FOUND", &e.to_string())
        }

        Err(CreateAlumniError::Unavailable(e)) => {
            error!(error = %e, "Alumni insert timed out");
            ApiResponse::service_unavailable()
        }

        Err(CreateAlumniError::RepositoryError(e)) => {
            error!(error = %e, "Failed to create alumni");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::{CallerIdentity, Role};
    use crate::modules::alumni::application::domain::AlumniValidationError;
    use crate::modules::alumni::application::ports::incoming::use_cases::CreateAlumniUseCase;
    use crate::modules::alumni::application::ports::outgoing::MockAlumniRepo;
    use crate::modules::alumni::application::service::CreateAlumniService;
    use crate::shared::api::custom_json_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_for, token_provider_data};
    use crate::tests::support::fixtures::alumni_fixture;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;

    struct MockCreateAlumni(Result<Alumni, CreateAlumniError>);

    #[async_trait]
    impl CreateAlumniUseCase for MockCreateAlumni {
        async fn execute(
            &self,
            _caller: CallerIdentity,
            _alumni: NewAlumni,
        ) -> Result<Alumni, CreateAlumniError> {
            self.0.clone()
        }
    }

    fn body() -> serde_json::Value {
        serde_json::json!({
            "nim": "434221001",
            "name": "Siti Aminah",
            "major": "Teknik Informatika",
            "cohort_year": 2019,
            "graduation_year": 2023,
            "email": "siti@example.com"
        })
    }

    async fn post(
        use_case: impl CreateAlumniUseCase + 'static,
        role: Role,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let app_state = TestAppStateBuilder::default()
            .with_create_alumni(use_case)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .app_data(custom_json_config())
                .service(create_alumni_handler),
        )
        .await;

        let (_, token) = bearer_for(role);
        let req = test::TestRequest::post()
            .uri("/alumni")
            .insert_header(("Authorization", token))
            .set_json(&body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn admin_creates_profile() {
        let (status, body) = post(
            MockCreateAlumni(Ok(alumni_fixture(None))),
            Role::Admin,
            body(),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["nim"], "434221001");
    }

    #[actix_web::test]
    async fn alumni_caller_gets_403_from_policy() {
        let mut repo = MockAlumniRepo::new();
        repo.expect_insert().never();

        let (status, body) = post(CreateAlumniService::new(repo), Role::Alumni, body()).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"]["code"], "FORBIDDEN");
    }

    #[actix_web::test]
    async fn validation_error_is_400() {
        let (status, body) = post(
            MockCreateAlumni(Err(CreateAlumniError::Validation(
                AlumniValidationError::InvalidEmail,
            ))),
            Role::Admin,
            body(),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn duplicate_nim_is_409() {
        let (status, body) = post(
            MockCreateAlumni(Err(CreateAlumniError::DuplicateNim)),
            Role::Admin,
            body(),
        )
        .await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "NIM_ALREADY_EXISTS");
    }

    #[actix_web::test]
    async fn missing_required_field_is_400() {
        let mut incomplete = body();
        incomplete.as_object_mut().unwrap().remove("nim");

        let (status, body) = post(
            MockCreateAlumni(Ok(alumni_fixture(None))),
            Role::Admin,
            incomplete,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
