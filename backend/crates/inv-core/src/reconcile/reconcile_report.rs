use crate::{ReconcileCounts, RecordOutcome, RecordReport};

use serde::Serialize;

/// Per-record results of one reconciliation run, in desired-state order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReconcileReport {
    pub dry_run: bool,
    entries: Vec<RecordReport>,
    counts: ReconcileCounts,
    /// Set when a store failure stopped the run early.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aborted: Option<String>,
}

impl ReconcileReport {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    pub fn push(&mut self, entry: RecordReport) {
        match entry.outcome {
            RecordOutcome::Created => self.counts.created += 1,
            RecordOutcome::Updated { .. } => self.counts.updated += 1,
            RecordOutcome::Unchanged => self.counts.unchanged += 1,
            RecordOutcome::Failed { .. } => self.counts.failed += 1,
            RecordOutcome::Skipped => self.counts.skipped += 1,
        }
        self.entries.push(entry);
    }

    pub fn abort(&mut self, reason: impl Into<String>) {
        self.aborted = Some(reason.into());
    }

    pub fn entries(&self) -> &[RecordReport] {
        &self.entries
    }

    pub fn counts(&self) -> ReconcileCounts {
        self.counts
    }

    pub fn entry(&self, identifier: &str) -> Option<&RecordReport> {
        self.entries.iter().find(|e| e.identifier == identifier)
    }

    pub fn is_aborted(&self) -> bool {
        self.aborted.is_some()
    }

    pub fn has_failures(&self) -> bool {
        self.entries.iter().any(|e| e.outcome.is_failure())
    }

    /// True only if every record was applied.
    pub fn is_success(&self) -> bool {
        !self.is_aborted() && !self.has_failures()
    }

    /// Process exit status: 0 when every record was applied, 1 when a record
    /// failed, 3 when a store failure aborted the run.
    pub fn exit_status(&self) -> u8 {
        if self.is_aborted() {
            3
        } else if self.has_failures() {
            1
        } else {
            0
        }
    }
}

impl std::fmt::Display for ReconcileReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.dry_run {
            writeln!(f, "dry run: no changes were written")?;
        }

        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }

        let counts = self.counts;
        write!(
            f,
            "{} created, {} updated, {} unchanged, {} failed, {} skipped",
            counts.created, counts.updated, counts.unchanged, counts.failed, counts.skipped
        )?;

        if let Some(reason) = &self.aborted {
            write!(f, "\naborted: {reason}")?;
        }

        Ok(())
    }
}
