use crate::RecordOutcome;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordReport {
    pub identifier: String,
    #[serde(flatten)]
    pub outcome: RecordOutcome,
    /// A credential reference was resolved and its value written (or, in a
    /// dry run, would have been).
    pub credential_applied: bool,
}

impl RecordReport {
    pub fn new(identifier: impl Into<String>, outcome: RecordOutcome) -> Self {
        Self {
            identifier: identifier.into(),
            outcome,
            credential_applied: false,
        }
    }

    pub fn with_credential_applied(mut self, applied: bool) -> Self {
        self.credential_applied = applied;
        self
    }

    pub fn failed(identifier: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(
            identifier,
            RecordOutcome::Failed {
                reason: reason.into(),
            },
        )
    }

    pub fn skipped(identifier: impl Into<String>) -> Self {
        Self::new(identifier, RecordOutcome::Skipped)
    }
}

impl std::fmt::Display for RecordReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.identifier, self.outcome)?;
        if self.credential_applied {
            write!(f, " [credential written]")?;
        }
        Ok(())
    }
}
