use async_trait::async_trait;
use subtle::ConstantTimeEq;
use tracing::warn;

use crate::modules::alumni::application::domain::AlumniCheck;
use crate::modules::alumni::application::ports::incoming::use_cases::{
    CheckAlumniError, CheckAlumniUseCase,
};
use crate::modules::alumni::application::ports::outgoing::AlumniRepository;
use crate::shared::persistence::{bounded, SINGLE_RECORD};

/// NIM lookup guarded by a shared key instead of a user token.
/// Without a configured key every request is rejected.
pub struct CheckAlumniService<R>
where
    R: AlumniRepository,
{
    repository: R,
    api_key: Option<String>,
}

impl<R> CheckAlumniService<R>
where
    R: AlumniRepository,
{
    pub fn new(repository: R, api_key: Option<String>) -> Self {
        let api_key = api_key.filter(|k| !k.trim().is_empty());
        if api_key.is_none() {
            warn!("API_KEY is not set; public alumni check is disabled");
        }
        Self {
            repository,
            api_key,
        }
    }

    fn key_matches(&self, key: &str) -> bool {
        match &self.api_key {
            Some(expected) => expected.as_bytes().ct_eq(key.as_bytes()).into(),
            None => false,
        }
    }
}

#[async_trait]
impl<R> CheckAlumniUseCase for CheckAlumniService<R>
where
    R: AlumniRepository + Send + Sync,
{
    async fn execute(&self, key: &str, nim: &str) -> Result<AlumniCheck, CheckAlumniError> {
        if !self.key_matches(key) {
            return Err(CheckAlumniError::InvalidKey);
        }

        let nim = nim.trim();
        if nim.is_empty() {
            return Err(CheckAlumniError::EmptyNim);
        }

        let alumni = bounded(SINGLE_RECORD, self.repository.find_by_nim(nim)).await?;

        Ok(AlumniCheck {
            is_alumni: alumni.is_some(),
            alumni,
        })
    }
}
