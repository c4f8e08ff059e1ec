// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

/// JSON envelope shared by every endpoint:
/// `{"success": bool, "data"?: T, "error"?: {"code", "message"}}`.
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

#[derive(Serialize, Clone)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

/// Failure classes a handler can answer with. Each maps to one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Unauthenticated,
    Forbidden,
    Validation,
    NotFound,
    Conflict,
    TransientStorage,
    Internal,
}

impl FailureKind {
    pub fn status(self) -> StatusCode {
        match self {
            FailureKind::Unauthenticated => StatusCode::UNAUTHORIZED,
            FailureKind::Forbidden => StatusCode::FORBIDDEN,
            FailureKind::Validation => StatusCode::BAD_REQUEST,
            FailureKind::NotFound => StatusCode::NOT_FOUND,
            FailureKind::Conflict => StatusCode::CONFLICT,
            FailureKind::TransientStorage => StatusCode::SERVICE_UNAVAILABLE,
            FailureKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    fn with_data(status: StatusCode, data: T) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        })
    }

    pub fn success(data: T) -> HttpResponse {
        Self::with_data(StatusCode::OK, data)
    }

    pub fn created(data: T) -> HttpResponse {
        Self::with_data(StatusCode::CREATED, data)
    }
}

impl ApiResponse<()> {
    pub fn error(status: StatusCode, code: &str, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse::<()> {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.to_string(),
                message: message.to_string(),
            }),
        })
    }

    pub fn failure(kind: FailureKind, code: &str, message: &str) -> HttpResponse {
        Self::error(kind.status(), code, message)
    }

    pub fn not_found(code: &str, message: &str) -> HttpResponse {
        Self::failure(FailureKind::NotFound, code, message)
    }

    pub fn bad_request(code: &str, message: &str) -> HttpResponse {
        Self::failure(FailureKind::Validation, code, message)
    }

    pub fn forbidden(code: &str, message: &str) -> HttpResponse {
        Self::failure(FailureKind::Forbidden, code, message)
    }

    pub fn unauthorized(code: &str, message: &str) -> HttpResponse {
        Self::failure(FailureKind::Unauthenticated, code, message)
    }

    pub fn conflict(code: &str, message: &str) -> HttpResponse {
        Self::failure(FailureKind::Conflict, code, message)
    }

    /// Storage timed out or could not be reached. Safe to retry.
    pub fn service_unavailable() -> HttpResponse {
        Self::failure(
            FailureKind::TransientStorage,
            "SERVICE_UNAVAILABLE",
            "The service is temporarily unavailable, please retry",
        )
    }

    /// Never carries the underlying error text.
    pub fn internal_error() -> HttpResponse {
        Self::failure(
            FailureKind::Internal,
            "INTERNAL_ERROR",
            "An unexpected error occurred",
        )
    }
}
