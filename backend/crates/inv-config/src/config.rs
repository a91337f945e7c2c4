use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    DatabaseConfig, LoggingConfig, UsersConfig,
};

use std::path::{Path, PathBuf};
use std::time::Duration;

use log::info;
use serde::Deserialize;

/// Shared configuration of the deployment.
///
/// The same file is read by the HTTP server and the background worker; the
/// user sync only looks at the sections below and treats the loaded value as
/// a snapshot for the whole run.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub users: UsersConfig,
    /// Directory relative paths are resolved against
    #[serde(skip)]
    base_dir: PathBuf,
}

impl Config {
    /// Load the config from the default location.
    ///
    /// Loading order:
    /// 1. Check for INV_CONFIG_DIR env var, else use ./.inv/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply INV_* environment variable overrides
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

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.base_dir = config_dir;
        config.apply_env_overrides();

        Ok(config)
    }

    /// Load an explicitly named config file. Unlike [`Config::load`] the file
    /// must exist. Relative paths inside it resolve against its directory.
    pub fn load_from(path: &Path) -> ConfigErrorResult<Self> {
        let mut config = Self::load_toml(path)?;

        config.base_dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => std::env::current_dir()
                .map_err(|_| ConfigError::config("Cannot determine current working directory"))?,
        };
        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
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

    /// Get the config directory.
    /// Priority: INV_CONFIG_DIR env var > ./.inv/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.database.validate()?;
        self.logging.validate()?;
        self.users.validate()?;

        Ok(())
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Absolute path to the database file.
    pub fn database_path(&self) -> PathBuf {
        self.resolve(&self.database.path)
    }

    pub fn busy_timeout(&self) -> Duration {
        Duration::from_secs(self.database.busy_timeout_secs)
    }

    /// Absolute path to the desired-state file.
    pub fn desired_state_path(&self) -> PathBuf {
        self.resolve(&self.users.desired_state)
    }

    /// Log file path when file logging is configured.
    pub fn log_file_path(&self) -> Option<PathBuf> {
        self.logging
            .file
            .as_ref()
            .map(|file| self.resolve(&self.logging.dir).join(file))
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded from {}:", self.base_dir.display());
        info!(
            "  database: {} (busy timeout {}s, auto migrate: {})",
            self.database_path().display(),
            self.database.busy_timeout_secs,
            self.database.auto_migrate
        );
        info!("  users: {}", self.desired_state_path().display());
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn resolve(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    fn apply_env_overrides(&mut self) {
        // Database
        Self::apply_env_string("INV_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "INV_DATABASE_BUSY_TIMEOUT_SECS",
            &mut self.database.busy_timeout_secs,
        );
        Self::apply_env_bool("INV_DATABASE_AUTO_MIGRATE", &mut self.database.auto_migrate);

        // Logging
        Self::apply_env_parse("INV_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("INV_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("INV_LOG_FILE", &mut self.logging.file);

        // Users
        Self::apply_env_string("INV_USERS_FILE", &mut self.users.desired_state);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
