use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

/// A credential reference that could not be resolved. Scoped to one record.
#[derive(Error, Debug)]
pub enum SecretError {
    #[error("Credential file {path} is missing {location}")]
    Missing {
        path: PathBuf,
        location: ErrorLocation,
    },

    #[error("Credential file {path} is unreadable: {source} {location}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Credential file {path} is empty {location}")]
    Empty {
        path: PathBuf,
        location: ErrorLocation,
    },
}

impl SecretError {
    /// Short reason for the per-record report, without source locations.
    pub fn describe(&self) -> String {
        match self {
            Self::Missing { path, .. } => {
                format!("credential unavailable: {} is missing", path.display())
            }
            Self::Unreadable { path, source, .. } => format!(
                "credential unavailable: {} is unreadable ({})",
                path.display(),
                source
            ),
            Self::Empty { path, .. } => {
                format!("credential unavailable: {} is empty", path.display())
            }
        }
    }
}

pub type SecretResult<T> = StdResult<T, SecretError>;
