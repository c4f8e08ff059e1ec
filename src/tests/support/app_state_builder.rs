use actix_web::web;
use std::sync::Arc;

use crate::auth::adapter::outgoing::security::{BcryptHasher, LegacyAwareHasher};
use crate::auth::application::orchestrator::user_registration::UserRegistrationOrchestrator;
use crate::auth::application::use_cases::login_user::ILoginUserUseCase;
use crate::modules::alumni::application::ports::incoming::use_cases::{
    CheckAlumniUseCase, CreateAlumniUseCase, DeleteAlumniUseCase, GetAlumniListUseCase,
    GetSingleAlumniUseCase, UpdateAlumniUseCase,
};
use crate::modules::file::application::ports::incoming::use_cases::{
    DeleteFileUseCase, GetFileUseCase, ListFilesUseCase, UploadFileUseCase,
};
use crate::modules::job::application::ports::incoming::use_cases::{
    CreateJobUseCase, GetJobListUseCase, GetJobTrashUseCase, GetJobsByAlumniUseCase,
    GetJobsByRoleUseCase, GetMultiJobAlumniUseCase, GetSingleJobUseCase, PurgeJobUseCase,
    RestoreJobUseCase, SoftDeleteJobUseCase, UpdateJobUseCase,
};
use crate::tests::support::auth_helper::test_token_provider;
use crate::tests::support::fakes::InMemoryStore;
use crate::{build_app_state, AppState, SharedServices};

pub const TEST_API_KEY: &str = "test-api-key";

/// Services with cheap hashing and the test token key.
pub fn test_shared_services() -> SharedServices {
    SharedServices {
        hasher: Arc::new(LegacyAwareHasher::new(Arc::new(BcryptHasher::with_cost(4)))),
        tokens: test_token_provider(),
        api_key: Some(TEST_API_KEY.to_string()),
    }
}

/// The full use-case graph over `store`.
pub fn state_over(store: &InMemoryStore) -> AppState {
    build_app_state(
        store.users(),
        store.alumni(),
        store.jobs(),
        store.files(),
        store.storage(),
        test_shared_services(),
    )
}

/// Starts from real services over an empty in-memory store; each `with_*`
/// swaps one use case for the caller's double.
pub struct TestAppStateBuilder {
    state: AppState,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            state: state_over(&InMemoryStore::default()),
        }
    }
}

impl TestAppStateBuilder {
    pub fn over(store: &InMemoryStore) -> Self {
        Self {
            state: state_over(store),
        }
    }

    // Auth
    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + 'static) -> Self {
        self.state.auth.login = Arc::new(uc);
        self
    }

    pub fn with_register_user(mut self, orchestrator: UserRegistrationOrchestrator) -> Self {
        self.state.auth.register = Arc::new(orchestrator);
        self
    }

    // Alumni
    pub fn with_get_alumni_list(mut self, uc: impl GetAlumniListUseCase + 'static) -> Self {
        self.state.alumni.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_alumni(mut self, uc: impl GetSingleAlumniUseCase + 'static) -> Self {
        self.state.alumni.get_single = Arc::new(uc);
        self
    }

    pub fn with_create_alumni(mut self, uc: impl CreateAlumniUseCase + 'static) -> Self {
        self.state.alumni.create = Arc::new(uc);
        self
    }

    pub fn with_update_alumni(mut self, uc: impl UpdateAlumniUseCase + 'static) -> Self {
        self.state.alumni.update = Arc::new(uc);
        self
    }

    pub fn with_delete_alumni(mut self, uc: impl DeleteAlumniUseCase + 'static) -> Self {
        self.state.alumni.delete = Arc::new(uc);
        self
    }

    pub fn with_check_alumni(mut self, uc: impl CheckAlumniUseCase + 'static) -> Self {
        self.state.alumni.check = Arc::new(uc);
        self
    }

    // Jobs
    pub fn with_get_job_list(mut self, uc: impl GetJobListUseCase + 'static) -> Self {
        self.state.job.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_job(mut self, uc: impl GetSingleJobUseCase + 'static) -> Self {
        self.state.job.get_single = Arc::new(uc);
        self
    }

    pub fn with_get_jobs_by_alumni(mut self, uc: impl GetJobsByAlumniUseCase + 'static) -> Self {
        self.state.job.get_by_alumni = Arc::new(uc);
        self
    }

    pub fn with_get_jobs_by_role(mut self, uc: impl GetJobsByRoleUseCase + 'static) -> Self {
        self.state.job.get_by_role = Arc::new(uc);
        self
    }

    pub fn with_multi_job_alumni(mut self, uc: impl GetMultiJobAlumniUseCase + 'static) -> Self {
        self.state.job.multi_job_alumni = Arc::new(uc);
        self
    }

    pub fn with_job_trash(mut self, uc: impl GetJobTrashUseCase + 'static) -> Self {
        self.state.job.trash = Arc::new(uc);
        self
    }

    pub fn with_create_job(mut self, uc: impl CreateJobUseCase + 'static) -> Self {
        self.state.job.create = Arc::new(uc);
        self
    }

    pub fn with_update_job(mut self, uc: impl UpdateJobUseCase + 'static) -> Self {
        self.state.job.update = Arc::new(uc);
        self
    }

    pub fn with_soft_delete_job(mut self, uc: impl SoftDeleteJobUseCase + 'static) -> Self {
        self.state.job.soft_delete = Arc::new(uc);
        self
    }

    pub fn with_restore_job(mut self, uc: impl RestoreJobUseCase + 'static) -> Self {
        self.state.job.restore = Arc::new(uc);
        self
    }

    pub fn with_purge_job(mut self, uc: impl PurgeJobUseCase + 'static) -> Self {
        self.state.job.purge = Arc::new(uc);
        self
    }

    // Files
    pub fn with_upload_file(mut self, uc: impl UploadFileUseCase + 'static) -> Self {
        self.state.file.upload = Arc::new(uc);
        self
    }

    pub fn with_list_files(mut self, uc: impl ListFilesUseCase + 'static) -> Self {
        self.state.file.list = Arc::new(uc);
        self
    }

    pub fn with_get_file(mut self, uc: impl GetFileUseCase + 'static) -> Self {
        self.state.file.get = Arc::new(uc);
        self
    }

    pub fn with_delete_file(mut self, uc: impl DeleteFileUseCase + 'static) -> Self {
        self.state.file.delete = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(self.state)
    }
}
