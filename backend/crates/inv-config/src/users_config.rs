use crate::{ConfigError, ConfigErrorResult, DEFAULT_DESIRED_STATE_FILENAME};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UsersConfig {
    /// Desired-state JSON, absolute or relative to the config directory
    pub desired_state: String,
}

impl Default for UsersConfig {
    fn default() -> Self {
        Self {
            desired_state: String::from(DEFAULT_DESIRED_STATE_FILENAME),
        }
    }
}

impl UsersConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.desired_state.trim().is_empty() {
            return Err(ConfigError::users("users.desired_state must not be empty"));
        }

        Ok(())
    }
}
