use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::alumni::application::domain::AlumniChanges;

/// Editable alumni fields
#[derive(Debug, Deserialize, ToSchema)]
pub struct AlumniPayload {
    #[schema(example = "434221001")]
    pub nim: String,

    #[schema(example = "Siti Aminah")]
    pub name: String,

    #[schema(example = "Teknik Informatika")]
    pub major: String,

    #[schema(example = 2019)]
    pub cohort_year: i32,

    #[schema(example = 2023)]
    pub graduation_year: i32,

    #[schema(example = "siti@example.com")]
    pub email: String,

    #[schema(example = "08123456789")]
    pub phone: Option<String>,

    #[schema(example = "Jl. Dharmawangsa Dalam, Surabaya")]
    pub address: Option<String>,
}

impl From<AlumniPayload> for AlumniChanges {
    fn from(p: AlumniPayload) -> Self {
        AlumniChanges {
            nim: p.nim,
            name: p.name,
            major: p.major,
            cohort_year: p.cohort_year,
            graduation_year: p.graduation_year,
            email: p.email,
            phone: p.phone,
            address: p.address,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAlumniRequest {
    /// Account to link the profile to
    pub user_id: Option<Uuid>,

    #[serde(flatten)]
    pub fields: AlumniPayload,
}
