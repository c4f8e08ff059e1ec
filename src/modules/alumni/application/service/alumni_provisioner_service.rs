use async_trait::async_trait;
use chrono::{Datelike, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::{AlumniProvisioner, ProvisionError};
use crate::modules::alumni::application::domain::{AlumniChanges, NewAlumni};
use crate::modules::alumni::application::ports::outgoing::{
    AlumniRepository, AlumniRepositoryError,
};
use crate::shared::persistence::{bounded, SINGLE_RECORD};

pub const PENDING_NIM_PREFIX: &str = "PENDING-";
pub const PENDING_MAJOR: &str = "-";

/// Placeholder profile for a self-registered alumni account. An admin
/// fills in the real NIM and study data afterwards.
pub fn placeholder_profile(user: &User) -> NewAlumni {
    let year = Utc::now().year();
    let short_id: String = user.id.simple().to_string().chars().take(8).collect();

    NewAlumni {
        user_id: Some(user.id),
        fields: AlumniChanges {
            nim: format!("{PENDING_NIM_PREFIX}{short_id}"),
            name: user.username.clone(),
            major: PENDING_MAJOR.to_string(),
            cohort_year: year,
            graduation_year: year,
            email: user.email.clone(),
            phone: None,
            address: None,
        },
    }
}

pub struct AlumniProvisionerService<R>
where
    R: AlumniRepository,
{
    repository: R,
}

impl<R> AlumniProvisionerService<R>
where
    R: AlumniRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> AlumniProvisioner for AlumniProvisionerService<R>
where
    R: AlumniRepository + Send + Sync,
{
    async fn provision_for(&self, user: &User) -> Result<Uuid, ProvisionError> {
        let profile = placeholder_profile(user);

        match bounded(SINGLE_RECORD, self.repository.insert(profile)).await {
            Ok(alumni) => Ok(alumni.id),
            Err(AlumniRepositoryError::DuplicateUser) => Err(ProvisionError::AlreadyLinked),
            Err(AlumniRepositoryError::Unavailable(msg)) => Err(ProvisionError::Unavailable(msg)),
            Err(other) => Err(ProvisionError::Failed(other.to_string())),
        }
    }
}
