use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_BUSY_TIMEOUT_SECS, DEFAULT_DATABASE_FILENAME,
    MAX_BUSY_TIMEOUT_SECS, MIN_BUSY_TIMEOUT_SECS,
};

use serde::Deserialize;

/// Location of the application's database, shared with the HTTP server and
/// the background worker.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite file, absolute or relative to the config directory
    pub path: String,
    /// How long to wait on a database locked by the other services
    pub busy_timeout_secs: u64,
    /// Provision the user table before syncing
    pub auto_migrate: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_DATABASE_FILENAME),
            busy_timeout_secs: DEFAULT_BUSY_TIMEOUT_SECS,
            auto_migrate: false,
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.path.trim().is_empty() {
            return Err(ConfigError::database("database.path must not be empty"));
        }

        if self.busy_timeout_secs < MIN_BUSY_TIMEOUT_SECS
            || self.busy_timeout_secs > MAX_BUSY_TIMEOUT_SECS
        {
            return Err(ConfigError::database(format!(
                "database.busy_timeout_secs must be {}-{}, got {}",
                MIN_BUSY_TIMEOUT_SECS, MAX_BUSY_TIMEOUT_SECS, self.busy_timeout_secs
            )));
        }

        Ok(())
    }
}
