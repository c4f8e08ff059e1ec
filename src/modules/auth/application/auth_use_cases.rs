use std::sync::Arc;

use crate::auth::application::orchestrator::user_registration::UserRegistrationOrchestrator;
use crate::auth::application::use_cases::login_user::ILoginUserUseCase;

#[derive(Clone)]
pub struct AuthUseCases {
    pub register: Arc<UserRegistrationOrchestrator>,
    pub login: Arc<dyn ILoginUserUseCase + Send + Sync>,
}
