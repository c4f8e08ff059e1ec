use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::orchestrator::user_registration::UserRegistrationError;
use crate::auth::application::use_cases::create_user::{CreateUserError, CreateUserInput};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Request body for user registration
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    /// 3-50 characters of letters, digits, `_` or `.`
    #[schema(example = "budi.santoso")]
    pub username: String,

    #[schema(example = "budi@example.com")]
    pub email: String,

    /// At least 6 characters
    #[schema(example = "rahasia123")]
    pub password: String,

    /// `admin` or `alumni`, defaults to `alumni`
    #[schema(example = "alumni")]
    pub role: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct RegisteredUser {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    id: String,

    #[schema(example = "budi.santoso")]
    username: String,

    #[schema(example = "budi@example.com")]
    email: String,

    #[schema(example = "alumni")]
    role: String,

    /// Alumni profile created alongside an alumni account
    #[schema(example = "0d9c7f5e-3d71-4b5a-9d0c-2f8b1f6f2a11")]
    alumni_id: Option<String>,
}

fn map_create_user_error(err: CreateUserError, req: &CreateUserRequest) -> HttpResponse {
    match &err {
        CreateUserError::InvalidUsername
        | CreateUserError::InvalidEmail
        | CreateUserError::InvalidRole(_)
        | CreateUserError::WeakPassword(_) => {
            warn!(
                username = %req.username,
                email = %req.email,
                error = %err,
                "Invalid registration input"
            );
            ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string())
        }

        CreateUserError::UserAlreadyExists => {
            warn!(username = %req.username, email = %req.email, "User already exists");
            ApiResponse::conflict("USER_ALREADY_EXISTS", "Username or email is already registered")
        }

        CreateUserError::Unavailable(e) => {
            error!(error = %e, "Storage unavailable during registration");
            ApiResponse::service_unavailable()
        }

        other => {
            error!(
                username = %req.username,
                error = %other,
                "Unhandled user creation error"
            );
            ApiResponse::internal_error()
        }
    }
}

/// Register a new user
///
/// Alumni accounts get a linked alumni profile with a placeholder NIM that
/// an admin completes later.
#[utoipa::path(
    post,
    path = "/api/register",
    tag = "auth",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = inline(SuccessResponse<RegisteredUser>)),
        (
            status = 400,
            description = "Validation error",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "Password must be at least 6 characters"
                }
            })
        ),
        (status = 409, description = "Username or email already registered", body = ErrorResponse),
        (status = 500, description = "Alumni profile could not be provisioned", body = ErrorResponse),
        (status = 503, description = "Storage unavailable", body = ErrorResponse),
    )
)]
#[post("/api/register")]
pub async fn register_user_handler(
    req: web::Json<CreateUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    info!(
        username = %req.username,
        email = %req.email,
        "User registration attempt"
    );

    let input = match CreateUserInput::new(
        req.username.clone(),
        req.email.clone(),
        req.password.clone(),
        req.role.clone(),
    ) {
        Ok(input) => input,
        Err(e) => return map_create_user_error(e, &req),
    };

    match data.auth.register.register_user(input).await {
        Ok(output) => {
            info!(
                user_id = %output.user.id,
                role = %output.user.role,
                "User registered"
            );

            ApiResponse::created(RegisteredUser {
                id: output.user.id.to_string(),
                username: output.user.username,
                email: output.user.email,
                role: output.user.role.to_string(),
                alumni_id: output.alumni_id.map(|id| id.to_string()),
            })
        }

        Err(UserRegistrationError::CreateUserFailed(e)) => map_create_user_error(e, &req),

        Err(UserRegistrationError::ProvisioningFailed { user_id, reason }) => {
            error!(%user_id, error = %reason, "Registered user has no alumni profile");
            ApiResponse::error(
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "ALUMNI_PROVISIONING_FAILED",
                "Account created but the alumni profile could not be set up",
            )
        }
    }
}
