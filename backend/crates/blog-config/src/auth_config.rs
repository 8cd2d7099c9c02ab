use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_BCRYPT_COST, DEFAULT_MIN_PASSWORD_LENGTH,
    MAX_BCRYPT_COST, MAX_PASSWORD_BYTES, MIN_BCRYPT_COST,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub bcrypt_cost: u32,
    pub min_password_length: usize,
    /// Existing account promoted to admin at startup
    pub bootstrap_admin_email: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: DEFAULT_BCRYPT_COST,
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            bootstrap_admin_email: None,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.bcrypt_cost) {
            return Err(ConfigError::auth(format!(
                "auth.bcrypt_cost must be {}-{}, got {}",
                MIN_BCRYPT_COST, MAX_BCRYPT_COST, self.bcrypt_cost
            )));
        }

        if self.min_password_length == 0 || self.min_password_length > MAX_PASSWORD_BYTES {
            return Err(ConfigError::auth(format!(
                "auth.min_password_length must be 1-{}, got {}",
                MAX_PASSWORD_BYTES, self.min_password_length
            )));
        }

        if let Some(email) = &self.bootstrap_admin_email
            && !email.contains('@')
        {
            return Err(ConfigError::auth(format!(
                "auth.bootstrap_admin_email '{email}' is not an email address"
            )));
        }

        Ok(())
    }
}
