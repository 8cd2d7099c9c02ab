use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    DatabaseConfig, LoggingConfig, ServerConfig, SessionConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub session: SessionConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. BLOG_CONFIG_DIR env var, else ./.blog/
    /// 2. Auto-create the config directory
    /// 3. Read config.toml if present, else defaults
    /// 4. Apply BLOG_* environment overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides()?;

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: BLOG_CONFIG_DIR env var > ./.blog/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(CONFIG_DIR_NAME))
    }

    /// Validate all sections. Call after load() to fail at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.session.validate()?;
        self.auth.validate()?;

        Ok(())
    }

    /// Absolute path to the database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Directory log files are written to.
    pub fn log_dir(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.logging.dir))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary. Never logs credentials.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (static: {})",
            self.server.host, self.server.port, self.server.static_dir
        );
        info!("  database: {}", self.database.path);
        info!(
            "  session: store={}, cookie={}, max_age={}s, secure={}, cleanup={}s",
            self.session.store,
            self.session.cookie_name,
            self.session.max_age_secs,
            self.session.secure_cookie,
            self.session.cleanup_interval_secs
        );
        info!(
            "  auth: bcrypt_cost={}, min_password={}, bootstrap_admin={}",
            self.auth.bcrypt_cost,
            self.auth.min_password_length,
            if self.auth.bootstrap_admin_email.is_some() {
                "set"
            } else {
                "none"
            }
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
    }

    fn apply_env_overrides(&mut self) -> ConfigErrorResult<()> {
        // Server
        Self::apply_env_string("BLOG_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("BLOG_SERVER_PORT", &mut self.server.port);
        Self::apply_env_string("BLOG_SERVER_STATIC_DIR", &mut self.server.static_dir);

        // Database
        Self::apply_env_string("BLOG_DATABASE_PATH", &mut self.database.path);

        // Session
        Self::apply_env_string("BLOG_SESSION_COOKIE_NAME", &mut self.session.cookie_name);
        Self::apply_env_parse("BLOG_SESSION_MAX_AGE_SECS", &mut self.session.max_age_secs);
        Self::apply_env_bool("BLOG_SESSION_SECURE_COOKIE", &mut self.session.secure_cookie);
        Self::apply_env_parse(
            "BLOG_SESSION_CLEANUP_INTERVAL_SECS",
            &mut self.session.cleanup_interval_secs,
        );
        // An unknown backend is an error rather than a silent fallback.
        if let Ok(val) = std::env::var("BLOG_SESSION_STORE") {
            self.session.store = val.parse()?;
        }

        // Auth
        Self::apply_env_parse("BLOG_AUTH_BCRYPT_COST", &mut self.auth.bcrypt_cost);
        Self::apply_env_parse(
            "BLOG_AUTH_MIN_PASSWORD_LENGTH",
            &mut self.auth.min_password_length,
        );
        Self::apply_env_option_string(
            "BLOG_AUTH_BOOTSTRAP_ADMIN_EMAIL",
            &mut self.auth.bootstrap_admin_email,
        );

        // Logging
        Self::apply_env_parse("BLOG_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("BLOG_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("BLOG_LOG_FILE", &mut self.logging.file);

        Ok(())
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = if val.trim().is_empty() { None } else { Some(val) };
        }
    }
}
