use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::auth::application::domain::entities::CallerIdentity;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::shared::api::ApiResponse;

/// The verified caller of a protected endpoint. Extraction fails with 401
/// before the handler body runs, so nothing is looked up for anonymous
/// requests.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedCaller(pub CallerIdentity);

impl AuthenticatedCaller {
    pub fn identity(&self) -> &CallerIdentity {
        &self.0
    }

    pub fn into_inner(self) -> CallerIdentity {
        self.0
    }
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedCaller {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_provider = match req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
        {
            Some(provider) => provider,
            None => {
                tracing::error!("TokenProvider missing from app data");
                return ready(Err(create_api_error(ApiResponse::internal_error())));
            }
        };

        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))));
            }
        };

        match token_provider.verify_token(token) {
            Ok(claims) => ready(Ok(AuthenticatedCaller(CallerIdentity::new(
                claims.sub,
                claims.role,
            )))),
            Err(e) => {
                tracing::debug!(error = %e, "Rejected bearer token");
                ready(Err(create_api_error(ApiResponse::unauthorized(
                    "INVALID_TOKEN",
                    "Invalid or expired token",
                ))))
            }
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
