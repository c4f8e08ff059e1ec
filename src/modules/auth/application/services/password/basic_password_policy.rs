use crate::auth::application::ports::incoming::password_policy::{
    PasswordPolicy, PasswordPolicyError,
};

#[derive(Debug, Clone)]
pub struct BasicPasswordPolicy {
    min_len: usize,
    max_len: usize,
}

impl Default for BasicPasswordPolicy {
    fn default() -> Self {
        Self {
            min_len: 6,
            max_len: 128,
        }
    }
}

impl PasswordPolicy for BasicPasswordPolicy {
    fn validate(&self, password: &str) -> Result<(), PasswordPolicyError> {
        let len = password.chars().count();

        if len < self.min_len {
            return Err(PasswordPolicyError::TooShort(self.min_len));
        }

        if len > self.max_len {
            return Err(PasswordPolicyError::TooLong(self.max_len));
        }

        Ok(())
    }
}
