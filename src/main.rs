pub mod api;
pub mod modules;
pub use modules::auth;
mod health;
pub mod shared;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::{Argon2Hasher, BcryptHasher, LegacyAwareHasher};
use crate::auth::adapter::outgoing::user_repository_mongo::UserRepositoryMongo;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::orchestrator::user_registration::UserRegistrationOrchestrator;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider, UserRepository};
use crate::auth::application::services::password::BasicPasswordPolicy;
use crate::auth::application::use_cases::{
    create_user::{CreateUserUseCase, ICreateUserUseCase},
    login_user::LoginUserUseCase,
};

use crate::modules::alumni::adapter::outgoing::{AlumniRepositoryMongo, AlumniRepositoryPostgres};
use crate::modules::alumni::application::alumni_use_cases::AlumniUseCases;
use crate::modules::alumni::application::ports::outgoing::AlumniRepository;
use crate::modules::alumni::application::service::{
    AlumniProvisionerService, CheckAlumniService, CreateAlumniService, DeleteAlumniService,
    GetAlumniListService, GetSingleAlumniService, UpdateAlumniService,
};

use crate::modules::job::adapter::outgoing::{JobRepositoryMongo, JobRepositoryPostgres};
use crate::modules::job::application::job_use_cases::JobUseCases;
use crate::modules::job::application::ports::outgoing::JobRepository;
use crate::modules::job::application::service::{
    CreateJobService, GetJobListService, GetJobTrashService, GetJobsByAlumniService,
    GetJobsByRoleService, GetMultiJobAlumniService, GetSingleJobService, PurgeJobService,
    RestoreJobService, SoftDeleteJobService, UpdateJobService,
};

use crate::modules::file::adapter::outgoing::{
    FileRepositoryMongo, FileRepositoryPostgres, LocalFileStorage,
};
use crate::modules::file::application::file_use_cases::FileUseCases;
use crate::modules::file::application::ports::outgoing::{FileRepository, FileStorage};
use crate::modules::file::application::service::{
    DeleteFileService, GetFileService, ListFilesService, UploadFileService,
};

use crate::api::openapi::ApiDoc;
use crate::shared::api::{custom_json_config, custom_path_config, custom_query_config};
use crate::shared::persistence::probe::{MongoProbe, PostgresProbe, StorageProbe};
use crate::shared::persistence::{mongo, StorageSettings};

use actix_web::{web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub alumni: AlumniUseCases,
    pub job: JobUseCases,
    pub file: FileUseCases,
}

/// Process-wide collaborators that do not depend on the storage backend.
#[derive(Clone)]
pub struct SharedServices {
    pub hasher: Arc<dyn PasswordHasher + Send + Sync>,
    pub tokens: Arc<dyn TokenProvider + Send + Sync>,
    pub api_key: Option<String>,
}

/// Wires every use case against one set of repositories. Both backends go
/// through here so the core never learns which one is active.
pub fn build_app_state<U, A, J, F, S>(
    users: U,
    alumni: A,
    jobs: J,
    files: F,
    storage: S,
    shared: SharedServices,
) -> AppState
where
    U: UserRepository + Clone + 'static,
    A: AlumniRepository + Clone + 'static,
    J: JobRepository + Clone + 'static,
    F: FileRepository + Clone + 'static,
    S: FileStorage + Clone + 'static,
{
    let create_user: Arc<dyn ICreateUserUseCase + Send + Sync> =
        Arc::new(CreateUserUseCase::new(
            users.clone(),
            Arc::clone(&shared.hasher),
            Arc::new(BasicPasswordPolicy::default()),
        ));
    let register = UserRegistrationOrchestrator::new(
        create_user,
        Arc::new(AlumniProvisionerService::new(alumni.clone())),
    );

    let auth = AuthUseCases {
        register: Arc::new(register),
        login: Arc::new(LoginUserUseCase::new(
            users,
            Arc::clone(&shared.hasher),
            Arc::clone(&shared.tokens),
        )),
    };

    let alumni_cases = AlumniUseCases {
        get_list: Arc::new(GetAlumniListService::new(alumni.clone())),
        get_single: Arc::new(GetSingleAlumniService::new(alumni.clone())),
        create: Arc::new(CreateAlumniService::new(alumni.clone())),
        update: Arc::new(UpdateAlumniService::new(alumni.clone())),
        delete: Arc::new(DeleteAlumniService::new(alumni.clone())),
        check: Arc::new(CheckAlumniService::new(alumni.clone(), shared.api_key)),
    };

    let job = JobUseCases {
        get_list: Arc::new(GetJobListService::new(jobs.clone())),
        get_single: Arc::new(GetSingleJobService::new(jobs.clone())),
        get_by_alumni: Arc::new(GetJobsByAlumniService::new(jobs.clone(), alumni.clone())),
        get_by_role: Arc::new(GetJobsByRoleService::new(jobs.clone(), alumni.clone())),
        multi_job_alumni: Arc::new(GetMultiJobAlumniService::new(jobs.clone(), alumni.clone())),
        trash: Arc::new(GetJobTrashService::new(jobs.clone(), alumni.clone())),
        create: Arc::new(CreateJobService::new(jobs.clone(), alumni.clone())),
        update: Arc::new(UpdateJobService::new(jobs.clone(), alumni.clone())),
        soft_delete: Arc::new(SoftDeleteJobService::new(jobs.clone(), alumni.clone())),
        restore: Arc::new(RestoreJobService::new(jobs.clone(), alumni.clone())),
        purge: Arc::new(PurgeJobService::new(jobs, alumni)),
    };

    let file = FileUseCases {
        upload: Arc::new(UploadFileService::new(files.clone(), storage.clone())),
        list: Arc::new(ListFilesService::new(files.clone())),
        get: Arc::new(GetFileService::new(files.clone())),
        delete: Arc::new(DeleteFileService::new(files, storage)),
    };

    AppState {
        auth,
        alumni: alumni_cases,
        job,
        file,
    }
}

fn password_hasher() -> Arc<dyn PasswordHasher + Send + Sync> {
    let choice = env::var("PASSWORD_HASHER").unwrap_or_else(|_| "argon2".to_string());
    let primary: Arc<dyn PasswordHasher + Send + Sync> = match choice.as_str() {
        "bcrypt" => Arc::new(BcryptHasher::default()),
        "argon2" => Arc::new(Argon2Hasher::from_env()),
        other => {
            warn!(hasher = other, "Unknown PASSWORD_HASHER, using argon2");
            Arc::new(Argon2Hasher::from_env())
        }
    };
    Arc::new(LegacyAwareHasher::new(primary))
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let settings = StorageSettings::from_env().unwrap_or_else(|e| panic!("{e}"));

    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let token_provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);

    let shared = SharedServices {
        hasher: password_hasher(),
        tokens: Arc::clone(&token_provider),
        api_key: env::var("API_KEY").ok(),
    };
    let storage = LocalFileStorage::from_env();

    info!(backend = %settings.backend(), "Selected storage backend");

    let (state, probe): (AppState, Arc<dyn StorageProbe>) = match settings {
        StorageSettings::Postgres {
            url,
            run_migrations,
        } => {
            let mut opt = ConnectOptions::new(url);
            opt.max_connections(50)
                .min_connections(10)
                .connect_timeout(Duration::from_secs(5))
                .acquire_timeout(Duration::from_secs(5))
                .idle_timeout(Duration::from_secs(300))
                .max_lifetime(Duration::from_secs(1800))
                .sqlx_logging(false);

            let conn = Database::connect(opt)
                .await
                .expect("Failed to connect to database");

            if run_migrations {
                Migrator::up(&conn, None)
                    .await
                    .expect("Failed to run migrations");
                info!("Migrations applied");
            }

            let db = Arc::new(conn);
            let state = build_app_state(
                UserRepositoryPostgres::new(Arc::clone(&db)),
                AlumniRepositoryPostgres::new(Arc::clone(&db)),
                JobRepositoryPostgres::new(Arc::clone(&db)),
                FileRepositoryPostgres::new(Arc::clone(&db)),
                storage,
                shared,
            );
            (state, Arc::new(PostgresProbe::new(db)))
        }
        StorageSettings::MongoDb { uri, database } => {
            let db = mongo::connect(&uri, &database)
                .await
                .expect("Failed to connect to MongoDB");

            mongo::ensure_indexes(&db)
                .await
                .expect("Failed to create MongoDB indexes");

            let state = build_app_state(
                UserRepositoryMongo::new(&db),
                AlumniRepositoryMongo::new(&db),
                JobRepositoryMongo::new(&db),
                FileRepositoryMongo::new(&db),
                storage,
                shared,
            );
            (state, Arc::new(MongoProbe::new(db)))
        }
    };

    let server_url = format!("{host}:{port}");
    info!(address = %server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&probe)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .app_data(custom_path_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::auth::adapter::incoming::web::routes as auth_routes;
    use crate::modules::alumni::adapter::incoming::web::routes as alumni_routes;
    use crate::modules::file::adapter::incoming::web::routes as file_routes;
    use crate::modules::job::adapter::incoming::web::routes as job_routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(auth_routes::register_user_handler);
    cfg.service(auth_routes::login_user_handler);
    // Alumni
    cfg.service(alumni_routes::check_alumni_handler);
    cfg.service(alumni_routes::get_alumni_list_handler);
    cfg.service(alumni_routes::create_alumni_handler);
    cfg.service(alumni_routes::get_single_alumni_handler);
    cfg.service(alumni_routes::update_alumni_handler);
    cfg.service(alumni_routes::delete_alumni_handler);
    // Jobs
    cfg.service(job_routes::get_jobs_by_role_handler);
    cfg.service(job_routes::get_multi_job_alumni_handler);
    cfg.service(job_routes::get_job_trash_handler);
    cfg.service(job_routes::restore_job_handler);
    cfg.service(job_routes::purge_job_handler);
    cfg.service(job_routes::get_jobs_by_alumni_handler);
    cfg.service(job_routes::get_job_list_handler);
    cfg.service(job_routes::create_job_handler);
    cfg.service(job_routes::get_single_job_handler);
    cfg.service(job_routes::update_job_handler);
    cfg.service(job_routes::soft_delete_job_handler);
    // Files
    cfg.service(file_routes::upload_file_handler);
    cfg.service(file_routes::upload_photo_handler);
    cfg.service(file_routes::upload_certificate_handler);
    cfg.service(file_routes::list_files_handler);
    cfg.service(file_routes::get_file_handler);
    cfg.service(file_routes::delete_file_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
