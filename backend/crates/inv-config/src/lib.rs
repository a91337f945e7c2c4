mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod users_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use users_config::UsersConfig;

const CONFIG_DIR_ENV: &str = "INV_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".inv";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_DATABASE_FILENAME: &str = "inventory.sqlite3";
const DEFAULT_BUSY_TIMEOUT_SECS: u64 = 5;
const MIN_BUSY_TIMEOUT_SECS: u64 = 1;
const MAX_BUSY_TIMEOUT_SECS: u64 = 300;

const DEFAULT_DESIRED_STATE_FILENAME: &str = "users.json";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
