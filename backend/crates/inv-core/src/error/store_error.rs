use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failure talking to the persistent user store. Always fatal for the run.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("User store unavailable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },

    #[error("User store rejected write: {message} {location}")]
    Constraint {
        message: String,
        location: ErrorLocation,
    },

    #[error("User store returned invalid data: {message} {location}")]
    Corrupt {
        message: String,
        location: ErrorLocation,
    },

    #[error("Password hashing failed: {message} {location}")]
    Hashing {
        message: String,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn unavailable<S: Into<String>>(message: S) -> Self {
        Self::Unavailable {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn constraint<S: Into<String>>(message: S) -> Self {
        Self::Constraint {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn corrupt<S: Into<String>>(message: S) -> Self {
        Self::Corrupt {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn hashing<S: Into<String>>(message: S) -> Self {
        Self::Hashing {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Short reason for the per-record report, without source locations.
    pub fn describe(&self) -> String {
        match self {
            Self::Unavailable { message, .. } => format!("store unavailable: {message}"),
            Self::Constraint { message, .. } => format!("store rejected write: {message}"),
            Self::Corrupt { message, .. } => format!("store returned invalid data: {message}"),
            Self::Hashing { message, .. } => format!("password hashing failed: {message}"),
        }
    }
}

pub type StoreResult<T> = StdResult<T, StoreError>;
