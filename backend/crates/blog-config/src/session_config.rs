use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_COOKIE_NAME, DEFAULT_SECURE_COOKIE,
    DEFAULT_SESSION_CLEANUP_INTERVAL_SECS, DEFAULT_SESSION_MAX_AGE_SECS,
};

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

/// Where server-side sessions live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionBackend {
    #[default]
    Sqlite,
    /// Process-local; sessions vanish on restart
    Memory,
}

impl FromStr for SessionBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sqlite" => Ok(SessionBackend::Sqlite),
            "memory" => Ok(SessionBackend::Memory),
            other => Err(ConfigError::session(format!(
                "session.store must be 'sqlite' or 'memory', got '{other}'"
            ))),
        }
    }
}

impl fmt::Display for SessionBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionBackend::Sqlite => write!(f, "sqlite"),
            SessionBackend::Memory => write!(f, "memory"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub cookie_name: String,
    pub max_age_secs: u64,
    pub secure_cookie: bool,
    pub store: SessionBackend,
    pub cleanup_interval_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: String::from(DEFAULT_COOKIE_NAME),
            max_age_secs: DEFAULT_SESSION_MAX_AGE_SECS,
            secure_cookie: DEFAULT_SECURE_COOKIE,
            store: SessionBackend::default(),
            cleanup_interval_secs: DEFAULT_SESSION_CLEANUP_INTERVAL_SECS,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.cookie_name.is_empty()
            || self
                .cookie_name
                .chars()
                .any(|c| c == ';' || c == '=' || c == ',' || c.is_whitespace() || c.is_control())
        {
            return Err(ConfigError::session(format!(
                "session.cookie_name '{}' is not a valid cookie name",
                self.cookie_name
            )));
        }

        if self.max_age_secs == 0 {
            return Err(ConfigError::session("session.max_age_secs must be > 0"));
        }

        if self.cleanup_interval_secs == 0 {
            return Err(ConfigError::session(
                "session.cleanup_interval_secs must be > 0",
            ));
        }

        Ok(())
    }

    pub fn max_age(&self) -> Duration {
        Duration::from_secs(self.max_age_secs)
    }

    pub fn cleanup_interval(&self) -> Duration {
        Duration::from_secs(self.cleanup_interval_secs)
    }
}
