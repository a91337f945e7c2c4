use crate::{EXIT_CONFIGURATION, EXIT_RECORD_FAILED, EXIT_STORE};

use inv_core::ConfigurationError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Config error: {0}")]
    Config(#[from] inv_config::ConfigError),

    #[error("Desired state error: {0}")]
    DesiredState(#[from] ConfigurationError),

    #[error("Database error: {0}")]
    Database(#[from] inv_db::DbError),

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to render report: {source} {location}")]
    Output {
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl SyncError {
    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            SyncError::Config(_) | SyncError::DesiredState(_) | SyncError::Logger { .. } => {
                EXIT_CONFIGURATION
            }
            SyncError::Database(_) => EXIT_STORE,
            SyncError::Output { .. } => EXIT_RECORD_FAILED,
        }
    }
}

impl From<serde_json::Error> for SyncError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Output {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;
