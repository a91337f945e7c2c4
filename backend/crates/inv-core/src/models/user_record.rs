use crate::UserAttributes;

use std::path::PathBuf;

/// One entry of the desired state, keyed by `identifier`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub identifier: String,
    pub attributes: UserAttributes,
    /// Path of the secret file holding the password. Read at apply time only.
    pub credential_ref: Option<PathBuf>,
}

impl UserRecord {
    pub fn new(identifier: impl Into<String>, attributes: UserAttributes) -> Self {
        Self {
            identifier: identifier.into(),
            attributes,
            credential_ref: None,
        }
    }

    pub fn with_credential_ref(mut self, path: impl Into<PathBuf>) -> Self {
        self.credential_ref = Some(path.into());
        self
    }
}
