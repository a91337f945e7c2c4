//! Desired-state document.
//!
//! The document is a JSON object keyed by identifier. It is produced by the
//! host's configuration layer and re-read on every run:
//!
//! ```json
//! {
//!   "alice": { "is_superuser": true, "password_file": "/run/secrets/alice" },
//!   "bob": { "is_staff": true, "email": "bob@example.org" }
//! }
//! ```
//!
//! Entries are collected in document order into a list rather than a map so
//! that a repeated key surfaces as [`ConfigurationError::DuplicateIdentifier`]
//! instead of the last entry silently winning.

use crate::{ConfigurationError, ConfigurationResult, UserAttributes, UserRecord};

use std::collections::HashSet;
use std::fmt;
use std::panic::Location;
use std::path::{Path, PathBuf};

use error_location::ErrorLocation;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DesiredState {
    records: Vec<UserRecord>,
}

impl DesiredState {
    pub fn new(records: Vec<UserRecord>) -> Self {
        Self { records }
    }

    /// Read, parse and validate the desired-state file at `path`.
    #[track_caller]
    pub fn load(path: &Path) -> ConfigurationResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigurationError::Io {
            path: path.to_path_buf(),
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        Self::from_json_str(&contents)
    }

    /// Parse and validate a desired-state document.
    #[track_caller]
    pub fn from_json_str(contents: &str) -> ConfigurationResult<Self> {
        let state: DesiredState =
            serde_json::from_str(contents).map_err(|e| ConfigurationError::Json {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            })?;

        state.validate()?;

        Ok(state)
    }

    /// Reject empty or repeated identifiers.
    #[track_caller]
    pub fn validate(&self) -> ConfigurationResult<()> {
        let mut seen = HashSet::with_capacity(self.records.len());

        for (index, record) in self.records.iter().enumerate() {
            if record.identifier.trim().is_empty() {
                return Err(ConfigurationError::EmptyIdentifier {
                    index,
                    location: ErrorLocation::from(Location::caller()),
                });
            }

            if !seen.insert(record.identifier.as_str()) {
                return Err(ConfigurationError::DuplicateIdentifier {
                    identifier: record.identifier.clone(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }

        Ok(())
    }

    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Settings for one identifier as written in the document.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct UserEntry {
    email: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    #[serde(alias = "superuser")]
    is_superuser: Option<bool>,
    #[serde(alias = "staff")]
    is_staff: Option<bool>,
    #[serde(alias = "active")]
    is_active: Option<bool>,
    #[serde(alias = "credentialRef")]
    password_file: Option<PathBuf>,
}

impl UserEntry {
    fn into_record(self, identifier: String) -> UserRecord {
        UserRecord {
            identifier,
            attributes: UserAttributes {
                email: self.email,
                first_name: self.first_name,
                last_name: self.last_name,
                is_superuser: self.is_superuser,
                is_staff: self.is_staff,
                is_active: self.is_active,
            },
            credential_ref: self.password_file,
        }
    }
}

struct DesiredStateVisitor;

impl<'de> Visitor<'de> for DesiredStateVisitor {
    type Value = Vec<UserRecord>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of user identifiers to user settings")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut records = Vec::with_capacity(map.size_hint().unwrap_or(0));

        while let Some((identifier, entry)) = map.next_entry::<String, UserEntry>()? {
            records.push(entry.into_record(identifier));
        }

        Ok(records)
    }
}

impl<'de> Deserialize<'de> for DesiredState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer
            .deserialize_map(DesiredStateVisitor)
            .map(|records| DesiredState { records })
    }
}
