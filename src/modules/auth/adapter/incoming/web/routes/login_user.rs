use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::login_user::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Login request from client
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    /// Username or email address
    #[schema(example = "budi.santoso")]
    pub identifier: String,

    /// Password
    #[schema(example = "rahasia123")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    token: String,

    /// Authenticated user information
    user: LoginUserInfo,
}

#[derive(Serialize, ToSchema)]
pub struct LoginUserInfo {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    id: String,

    #[schema(example = "budi.santoso")]
    username: String,

    #[schema(example = "budi@example.com")]
    email: String,

    /// `admin` or `alumni`
    #[schema(example = "alumni")]
    role: String,
}

/// User login
///
/// Authenticates with a username or email and returns a JWT access token
/// carrying the caller's role.
#[utoipa::path(
    post,
    path = "/api/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<LoginResponse>)),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CREDENTIALS",
                    "message": "Invalid username/email or password"
                }
            })
        ),
        (status = 400, description = "Empty identifier or password", body = ErrorResponse),
        (status = 503, description = "Storage unavailable", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!(identifier = %dto.identifier, "Login attempt");

    let request = match LoginRequest::new(dto.identifier, dto.password) {
        Ok(req) => req,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.auth.login.execute(request).await {
        Ok(response) => {
            info!(
                user_id = %response.user.id,
                role = %response.user.role,
                "User logged in successfully"
            );

            ApiResponse::success(LoginResponse {
                token: response.token,
                user: LoginUserInfo {
                    id: response.user.id.to_string(),
                    username: response.user.username,
                    email: response.user.email,
                    role: response.user.role.to_string(),
                },
            })
        }

        Err(LoginError::InvalidCredentials) => {
            warn!("Login failed: Invalid credentials");
            ApiResponse::unauthorized(
                "INVALID_CREDENTIALS",
                &LoginError::InvalidCredentials.to_string(),
            )
        }

        Err(LoginError::Unavailable(ref e)) => {
            error!(error = %e, "Storage unavailable during login");
            ApiResponse::service_unavailable()
        }

        Err(e) => {
            error!(error = %e, "Login failed unexpectedly");
            ApiResponse::internal_error()
        }
    }
}
