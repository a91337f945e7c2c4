use crate::{
    ConfigurationResult, Credential, DesiredState, ReconcileReport, RecordOutcome, RecordReport,
    SecretError, StoreError, UserRecord, UserStore,
};

use log::{error, info, warn};

/// Converges the user store toward a desired state in one pass.
///
/// Records are applied one at a time in document order. A record whose
/// credential cannot be resolved is reported as failed and the pass moves
/// on; a store failure stops the pass and marks the remaining records as
/// skipped. Users absent from the desired state are never touched.
pub struct Reconciler<'a> {
    store: &'a dyn UserStore,
    dry_run: bool,
}

impl<'a> Reconciler<'a> {
    pub fn new(store: &'a dyn UserStore) -> Self {
        Self {
            store,
            dry_run: false,
        }
    }

    /// Resolve credentials and compute outcomes without writing to the store.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Apply `desired` to the store.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`](crate::ConfigurationError) when the
    /// desired state has empty or duplicate identifiers. Nothing is written
    /// in that case. Per-record and store failures are reported through the
    /// returned [`ReconcileReport`].
    pub async fn reconcile(&self, desired: &DesiredState) -> ConfigurationResult<ReconcileReport> {
        desired.validate()?;

        let mut report = ReconcileReport::new(self.dry_run);
        let mut records = desired.records().iter();

        while let Some(record) = records.next() {
            match self.apply(record).await {
                Ok(entry) => {
                    info!("User {}", entry);
                    report.push(entry);
                }
                Err(RecordError::Secret(e)) => {
                    warn!("User {} not applied: {}", record.identifier, e);
                    report.push(RecordReport::failed(&record.identifier, e.describe()));
                }
                Err(RecordError::Store(e)) => {
                    error!("Aborting at user {}: {}", record.identifier, e);
                    report.push(RecordReport::failed(&record.identifier, e.describe()));
                    report.abort(e.describe());
                    for remaining in records.by_ref() {
                        report.push(RecordReport::skipped(&remaining.identifier));
                    }
                }
            }
        }

        Ok(report)
    }

    async fn apply(&self, record: &UserRecord) -> Result<RecordReport, RecordError> {
        let credential = record
            .credential_ref
            .as_deref()
            .map(Credential::resolve)
            .transpose()?;
        let credential_applied = credential.is_some();

        let Some(stored) = self.store.find_by_identifier(&record.identifier).await? else {
            if !self.dry_run {
                self.store
                    .create_user(&record.identifier, &record.attributes, credential.as_ref())
                    .await?;
            }

            return Ok(RecordReport::new(&record.identifier, RecordOutcome::Created)
                .with_credential_applied(credential_applied));
        };

        let changes = record.attributes.changes_from(&stored);

        if !self.dry_run && (!changes.is_empty() || credential_applied) {
            self.store
                .update_user(stored.id, &changes, credential.as_ref())
                .await?;
        }

        let outcome = if changes.is_empty() {
            RecordOutcome::Unchanged
        } else {
            RecordOutcome::Updated {
                fields: changes.changed_fields(),
            }
        };

        Ok(RecordReport::new(&record.identifier, outcome).with_credential_applied(credential_applied))
    }
}

enum RecordError {
    Secret(SecretError),
    Store(StoreError),
}

impl From<SecretError> for RecordError {
    fn from(e: SecretError) -> Self {
        Self::Secret(e)
    }
}

impl From<StoreError> for RecordError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}
