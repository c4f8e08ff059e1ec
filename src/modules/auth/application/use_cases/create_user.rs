use async_trait::async_trait;
use email_address::EmailAddress;
use regex::Regex;
use std::sync::{Arc, OnceLock};

use crate::auth::application::domain::entities::{NewUser, Role, User};
use crate::auth::application::ports::incoming::password_policy::{
    PasswordPolicy, PasswordPolicyError,
};
use crate::auth::application::ports::outgoing::{
    PasswordHasher, UserRepository, UserRepositoryError,
};
use crate::shared::persistence::{bounded, SINGLE_RECORD};

// ========================= Create User Input =========================

fn username_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9_.]{3,50}$").expect("valid username regex"))
}

/// Registration input with username, email and role already validated.
/// The password is checked against the use case's policy on execute.
#[derive(Debug, Clone)]
pub struct CreateUserInput {
    username: String,
    email: String,
    password: String,
    role: Role,
}

impl CreateUserInput {
    pub fn new(
        username: String,
        email: String,
        password: String,
        role: Option<String>,
    ) -> Result<Self, CreateUserError> {
        let username = username.trim().to_string();
        if !username_pattern().is_match(&username) {
            return Err(CreateUserError::InvalidUsername);
        }

        let email = email.trim().to_lowercase();
        if !EmailAddress::is_valid(&email) {
            return Err(CreateUserError::InvalidEmail);
        }

        let role = match role.as_deref().map(str::trim) {
            None | Some("") => Role::Alumni,
            Some(raw) => raw
                .parse::<Role>()
                .map_err(|e| CreateUserError::InvalidRole(e.0))?,
        };

        Ok(Self {
            username,
            email,
            password,
            role,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> Role {
        self.role
    }
}

// ========================= Create User Error =========================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateUserError {
    #[error("Username must be 3-50 characters of letters, digits, '_' or '.'")]
    InvalidUsername,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Unknown role: {0}")]
    InvalidRole(String),

    #[error(transparent)]
    WeakPassword(#[from] PasswordPolicyError),

    #[error("Username or email is already registered")]
    UserAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<UserRepositoryError> for CreateUserError {
    fn from(e: UserRepositoryError) -> Self {
        match e {
            UserRepositoryError::UserAlreadyExists => CreateUserError::UserAlreadyExists,
            UserRepositoryError::Unavailable(msg) => CreateUserError::Unavailable(msg),
            UserRepositoryError::DatabaseError(msg) => CreateUserError::RepositoryError(msg),
        }
    }
}

// ========================= Create User Use Case =========================

#[async_trait]
pub trait ICreateUserUseCase: Send + Sync {
    async fn execute(&self, input: CreateUserInput) -> Result<User, CreateUserError>;
}

#[derive(Clone)]
pub struct CreateUserUseCase<R>
where
    R: UserRepository,
{
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    password_policy: Arc<dyn PasswordPolicy + Send + Sync>,
}

impl<R> CreateUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(
        repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        password_policy: Arc<dyn PasswordPolicy + Send + Sync>,
    ) -> Self {
        Self {
            repository,
            password_hasher,
            password_policy,
        }
    }
}

#[async_trait]
impl<R> ICreateUserUseCase for CreateUserUseCase<R>
where
    R: UserRepository,
{
    async fn execute(&self, input: CreateUserInput) -> Result<User, CreateUserError> {
        self.password_policy.validate(&input.password)?;

        let password_hash = self
            .password_hasher
            .hash_password(&input.password)
            .await
            .map_err(|e| CreateUserError::HashingFailed(e.to_string()))?;

        // Uniqueness is enforced by the store, so concurrent sign-ups with
        // the same username cannot both succeed.
        let user = bounded(
            SINGLE_RECORD,
            self.repository.create_user(NewUser {
                username: input.username,
                email: input.email,
                password_hash,
                role: input.role,
            }),
        )
        .await?;

        tracing::info!(user_id = %user.id, role = %user.role, "User created");
        Ok(user)
    }
}
