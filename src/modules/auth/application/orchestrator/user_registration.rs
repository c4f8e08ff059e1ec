use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{Role, User};
use crate::auth::application::ports::outgoing::{AlumniProvisioner, ProvisionError};
use crate::auth::application::use_cases::create_user::{
    CreateUserError, CreateUserInput, ICreateUserUseCase,
};

// ============================================================================
// Registration Output
// ============================================================================

#[derive(Debug, Clone)]
pub struct UserRegistrationOutput {
    pub user: User,
    /// Alumni record linked at sign-up. Always `None` for admins.
    pub alumni_id: Option<Uuid>,
}

// ============================================================================
// Registration Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum UserRegistrationError {
    #[error("User creation failed: {0}")]
    CreateUserFailed(#[from] CreateUserError),

    #[error("User {user_id} was created but its alumni record was not: {reason}")]
    ProvisioningFailed { user_id: Uuid, reason: ProvisionError },
}

// ============================================================================
// User Registration Service (Orchestration Layer)
// ============================================================================

#[derive(Clone)]
pub struct UserRegistrationOrchestrator {
    create_user_use_case: Arc<dyn ICreateUserUseCase + Send + Sync>,
    provisioner: Arc<dyn AlumniProvisioner + Send + Sync>,
}

impl UserRegistrationOrchestrator {
    pub fn new(
        create_user_use_case: Arc<dyn ICreateUserUseCase + Send + Sync>,
        provisioner: Arc<dyn AlumniProvisioner + Send + Sync>,
    ) -> Self {
        Self {
            create_user_use_case,
            provisioner,
        }
    }

    /// Orchestrates complete user registration:
    /// 1. Creates user account
    /// 2. Links exactly one alumni record when the account is an alumni
    pub async fn register_user(
        &self,
        input: CreateUserInput,
    ) -> Result<UserRegistrationOutput, UserRegistrationError> {
        // Step 1: Create user account
        let user = self.create_user_use_case.execute(input).await?;

        if user.role != Role::Alumni {
            return Ok(UserRegistrationOutput {
                user,
                alumni_id: None,
            });
        }

        // Step 2: Provision the linked alumni record. The account is kept
        // even when this fails so an admin can link it by hand.
        match self.provisioner.provision_for(&user).await {
            Ok(alumni_id) => {
                tracing::info!(user_id = %user.id, %alumni_id, "Alumni record provisioned");
                Ok(UserRegistrationOutput {
                    user,
                    alumni_id: Some(alumni_id),
                })
            }
            Err(reason) => {
                tracing::error!(user_id = %user.id, error = %reason, "Alumni provisioning failed");
                Err(UserRegistrationError::ProvisioningFailed {
                    user_id: user.id,
                    reason,
                })
            }
        }
    }
}
