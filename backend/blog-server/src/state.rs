use crate::{ApiError, ApiResult};

use blog_auth::{PasswordHasher, SessionStore};
use blog_config::{AuthConfig, Config, SessionConfig};

use std::panic::Location;
use std::path::PathBuf;
use std::sync::Arc;

use error_location::ErrorLocation;
use sqlx::SqlitePool;

/// Shared handles injected into every handler and middleware.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub sessions: Arc<dyn SessionStore>,
    pub hasher: PasswordHasher,
    pub session: SessionConfig,
    pub auth: AuthConfig,
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(pool: SqlitePool, sessions: Arc<dyn SessionStore>, config: &Config) -> Self {
        Self {
            pool,
            sessions,
            hasher: PasswordHasher::new(config.auth.bcrypt_cost),
            session: config.session.clone(),
            auth: config.auth.clone(),
            static_dir: PathBuf::from(&config.server.static_dir),
        }
    }

    /// Lifetime of a freshly created session
    #[track_caller]
    pub fn session_ttl(&self) -> ApiResult<chrono::Duration> {
        i64::try_from(self.session.max_age_secs)
            .ok()
            .and_then(chrono::Duration::try_seconds)
            .ok_or_else(|| ApiError::Internal {
                message: format!(
                    "session.max_age_secs {} is out of range",
                    self.session.max_age_secs
                ),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
