mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod session_config;

#[cfg(test)]
mod tests;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use session_config::{SessionBackend, SessionConfig};

pub const CONFIG_DIR_ENV: &str = "BLOG_CONFIG_DIR";
pub const CONFIG_DIR_NAME: &str = ".blog";
pub const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;
const DEFAULT_STATIC_DIR: &str = "public";

const DEFAULT_DATABASE_FILENAME: &str = "blog.db";

const DEFAULT_COOKIE_NAME: &str = "user_session";
const DEFAULT_SESSION_MAX_AGE_SECS: u64 = 2 * 60 * 60;
const DEFAULT_SECURE_COOKIE: bool = false;
const DEFAULT_SESSION_CLEANUP_INTERVAL_SECS: u64 = 600;

const DEFAULT_BCRYPT_COST: u32 = 10;
const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;
const DEFAULT_MIN_PASSWORD_LENGTH: usize = 8;
// bcrypt ignores input past this many bytes
const MAX_PASSWORD_BYTES: usize = 72;

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
const DEFAULT_LOG_DIRECTORY: &str = "log";
