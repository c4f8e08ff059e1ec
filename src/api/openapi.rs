use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::{
    CreateUserRequest, LoginRequestDto, LoginResponse, LoginUserInfo, RegisteredUser,
};
use crate::modules::alumni::adapter::incoming::web::routes::{
    AlumniPayload, CheckAlumniRequest, CreateAlumniRequest, DeletedAlumni,
};
use crate::modules::alumni::application::domain::{Alumni, AlumniCheck};
use crate::modules::file::adapter::incoming::web::routes::UploadForm;
use crate::modules::file::application::domain::{DeletedFile, StoredFile, UploadCategory};
use crate::modules::job::adapter::incoming::web::routes::{
    CreateJobRequest, JobPayload, JobStateChange,
};
use crate::modules::job::application::domain::{AlumniJobCount, Job, JobState, TrashEntry};
use crate::shared::pagination::{MetaInfo, SortOrder};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Alumni Records API",
        version = "1.0.0",
        description = "Alumni profiles, their employment history and uploaded documents"
    ),
    paths(
        // Auth
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,

        // Alumni
        crate::modules::alumni::adapter::incoming::web::routes::get_alumni_list_handler,
        crate::modules::alumni::adapter::incoming::web::routes::get_single_alumni_handler,
        crate::modules::alumni::adapter::incoming::web::routes::create_alumni_handler,
        crate::modules::alumni::adapter::incoming::web::routes::update_alumni_handler,
        crate::modules::alumni::adapter::incoming::web::routes::delete_alumni_handler,
        crate::modules::alumni::adapter::incoming::web::routes::check_alumni_handler,

        // Jobs
        crate::modules::job::adapter::incoming::web::routes::get_job_list_handler,
        crate::modules::job::adapter::incoming::web::routes::get_single_job_handler,
        crate::modules::job::adapter::incoming::web::routes::get_jobs_by_alumni_handler,
        crate::modules::job::adapter::incoming::web::routes::create_job_handler,
        crate::modules::job::adapter::incoming::web::routes::update_job_handler,
        crate::modules::job::adapter::incoming::web::routes::soft_delete_job_handler,
        crate::modules::job::adapter::incoming::web::routes::get_jobs_by_role_handler,
        crate::modules::job::adapter::incoming::web::routes::get_multi_job_alumni_handler,
        crate::modules::job::adapter::incoming::web::routes::get_job_trash_handler,
        crate::modules::job::adapter::incoming::web::routes::restore_job_handler,
        crate::modules::job::adapter::incoming::web::routes::purge_job_handler,

        // Files
        crate::modules::file::adapter::incoming::web::routes::upload_file_handler,
        crate::modules::file::adapter::incoming::web::routes::upload_photo_handler,
        crate::modules::file::adapter::incoming::web::routes::upload_certificate_handler,
        crate::modules::file::adapter::incoming::web::routes::list_files_handler,
        crate::modules::file::adapter::incoming::web::routes::get_file_handler,
        crate::modules::file::adapter::incoming::web::routes::delete_file_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,
            MetaInfo,
            SortOrder,

            // Auth DTOs
            CreateUserRequest,
            RegisteredUser,
            LoginRequestDto,
            LoginResponse,
            LoginUserInfo,

            // Alumni
            Alumni,
            AlumniCheck,
            AlumniPayload,
            CreateAlumniRequest,
            CheckAlumniRequest,
            DeletedAlumni,

            // Jobs
            Job,
            JobState,
            AlumniJobCount,
            TrashEntry,
            JobPayload,
            CreateJobRequest,
            JobStateChange,

            // Files
            StoredFile,
            DeletedFile,
            UploadCategory,
            UploadForm
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Authentication endpoints"),
        (name = "alumni", description = "Alumni profile endpoints"),
        (name = "pekerjaan", description = "Alumni employment records and their trash"),
        (name = "files", description = "Document and photo uploads"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token returned by /api/login"))
                        .build(),
                ),
            )
        }
    }
}
