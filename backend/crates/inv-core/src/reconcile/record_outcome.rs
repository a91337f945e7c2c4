use serde::Serialize;

/// What happened to one desired-state record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RecordOutcome {
    /// The identifier was unknown to the store and a user was inserted.
    Created,
    /// One or more declared attributes differed and were overwritten.
    Updated { fields: Vec<&'static str> },
    /// Every declared attribute already matched.
    Unchanged,
    /// The record could not be applied.
    Failed { reason: String },
    /// Never attempted because the run aborted on a store failure.
    Skipped,
}

impl RecordOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

impl std::fmt::Display for RecordOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Created => write!(f, "created"),
            Self::Updated { fields } => write!(f, "updated ({})", fields.join(", ")),
            Self::Unchanged => write!(f, "unchanged"),
            Self::Failed { reason } => write!(f, "failed: {reason}"),
            Self::Skipped => write!(f, "skipped"),
        }
    }
}
