use actix_web::web;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::domain::entities::{CallerIdentity, Role, User};
use crate::auth::application::ports::outgoing::TokenProvider;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret_key: "test_secret_key_for_testing_only_0123456789".to_string(),
        issuer: "alumni-api-test".to_string(),
        access_token_expiry: 3600,
    }
}

pub fn test_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(JwtTokenService::new(test_jwt_config()))
}

/// Same shape the production server registers for the auth extractor.
pub fn token_provider_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    web::Data::new(test_token_provider())
}

pub fn test_user(role: Role) -> User {
    let id = Uuid::new_v4();
    User {
        id,
        username: format!("user_{}", &id.simple().to_string()[..8]),
        email: format!("{}@example.com", id.simple()),
        password_hash: String::new(),
        role,
        created_at: Utc::now(),
    }
}

/// `Authorization` header value for `user`.
pub fn bearer(user: &User) -> String {
    let token = test_token_provider()
        .generate_access_token(user)
        .expect("test token");
    format!("Bearer {token}")
}

/// A fresh caller of `role` together with its header value.
pub fn bearer_for(role: Role) -> (CallerIdentity, String) {
    let user = test_user(role);
    (CallerIdentity::new(user.id, role), bearer(&user))
}
