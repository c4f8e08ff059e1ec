use async_trait::async_trait;
use std::sync::Arc;

use super::bcrypt_hasher::{is_bcrypt_hash, BcryptHasher};
use crate::auth::application::ports::outgoing::password_hasher::{HashError, PasswordHasher};

/// Hashes with the configured primary algorithm but still verifies bcrypt
/// hashes, so seeded accounts created with bcrypt keep logging in.
#[derive(Clone)]
pub struct LegacyAwareHasher {
    primary: Arc<dyn PasswordHasher + Send + Sync>,
    legacy: BcryptHasher,
}

impl LegacyAwareHasher {
    pub fn new(primary: Arc<dyn PasswordHasher + Send + Sync>) -> Self {
        Self {
            primary,
            legacy: BcryptHasher::default(),
        }
    }
}

#[async_trait]
impl PasswordHasher for LegacyAwareHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        self.primary.hash_password(password).await
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        if is_bcrypt_hash(hash) {
            tracing::debug!("Verifying legacy bcrypt hash");
            return self.legacy.verify_password(password, hash).await;
        }
        self.primary.verify_password(password, hash).await
    }
}
