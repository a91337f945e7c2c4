//! Resolution of credential references.
//!
//! A credential reference is the path of a plain-text secret file, usually
//! provisioned by the host's secret manager. The file is read only when a
//! record is applied and its content never leaves [`Credential`] except
//! through [`Credential::expose`].

use crate::{SecretError, SecretResult};

use std::fmt;
use std::io::ErrorKind;
use std::panic::Location;
use std::path::Path;

use error_location::ErrorLocation;

/// A resolved secret value.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    secret: String,
}

impl Credential {
    /// Wrap a secret that is already in memory.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Read the secret file at `path`.
    ///
    /// One trailing line terminator is dropped so files written by `echo`
    /// or editors resolve to the intended value.
    ///
    /// # Errors
    ///
    /// - [`SecretError::Missing`] if the file does not exist.
    /// - [`SecretError::Unreadable`] on any other I/O or encoding failure.
    /// - [`SecretError::Empty`] if nothing but whitespace remains.
    #[track_caller]
    pub fn resolve(path: &Path) -> SecretResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => SecretError::Missing {
                path: path.to_path_buf(),
                location: ErrorLocation::from(Location::caller()),
            },
            _ => SecretError::Unreadable {
                path: path.to_path_buf(),
                source: e,
                location: ErrorLocation::from(Location::caller()),
            },
        })?;

        let secret = contents
            .strip_suffix('\n')
            .map(|s| s.strip_suffix('\r').unwrap_or(s))
            .unwrap_or(contents.as_str());

        if secret.trim().is_empty() {
            return Err(SecretError::Empty {
                path: path.to_path_buf(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self::new(secret))
    }

    pub fn expose(&self) -> &str {
        &self.secret
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}
