use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::Role;
use crate::auth::application::ports::outgoing::{
    PasswordHasher, TokenProvider, UserRepository, UserRepositoryError,
};
use crate::shared::persistence::{bounded, SINGLE_RECORD};

// ========================= Login Request =========================

/// Validated login request. The identifier is a username or an email.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    identifier: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginRequestError {
    #[error("Username or email cannot be empty")]
    EmptyIdentifier,

    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl LoginRequest {
    pub fn new(identifier: String, password: String) -> Result<Self, LoginRequestError> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Err(LoginRequestError::EmptyIdentifier);
        }

        if password.is_empty() {
            return Err(LoginRequestError::EmptyPassword);
        }

        let identifier = if identifier.contains('@') {
            identifier.to_lowercase()
        } else {
            identifier.to_string()
        };

        Ok(Self {
            identifier,
            password,
        })
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ====================== Login Error =============================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid username/email or password")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

impl From<UserRepositoryError> for LoginError {
    fn from(e: UserRepositoryError) -> Self {
        match e {
            UserRepositoryError::Unavailable(msg) => LoginError::Unavailable(msg),
            other => LoginError::QueryError(other.to_string()),
        }
    }
}

// ============================ Login Response =================================

#[derive(Debug, Clone, Serialize)]
pub struct UserInfo {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginUserResponse {
    pub token: String,
    pub user: UserInfo,
}

// ============================ Login User Use Case =============================

#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError>;
}

#[derive(Clone)]
pub struct LoginUserUseCase<R>
where
    R: UserRepository,
{
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<R> LoginUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(
        repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            repository,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<R> ILoginUserUseCase for LoginUserUseCase<R>
where
    R: UserRepository,
{
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        // 1. Unknown identifiers and wrong passwords look the same to the client
        let user = bounded(
            SINGLE_RECORD,
            self.repository.find_by_identifier(request.identifier()),
        )
        .await?
        .ok_or(LoginError::InvalidCredentials)?;

        // 2. Verify password
        let is_valid = self
            .password_hasher
            .verify_password(request.password(), &user.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            return Err(LoginError::InvalidCredentials);
        }

        // 3. Issue the access token
        let token = self
            .token_provider
            .generate_access_token(&user)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(LoginUserResponse {
            token,
            user: UserInfo {
                id: user.id,
                username: user.username,
                email: user.email,
                role: user.role,
            },
        })
    }
}
