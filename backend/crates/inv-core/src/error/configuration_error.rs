use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

/// Desired state that cannot be applied at all. Raised before any store
/// mutation happens.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("Failed to read desired state {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Malformed desired state: {source} {location}")]
    Json {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Empty identifier in desired state entry #{index} {location}")]
    EmptyIdentifier {
        index: usize,
        location: ErrorLocation,
    },

    #[error("Duplicate identifier in desired state: {identifier} {location}")]
    DuplicateIdentifier {
        identifier: String,
        location: ErrorLocation,
    },
}

pub type ConfigurationResult<T> = StdResult<T, ConfigurationError>;
