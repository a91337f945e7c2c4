pub mod credential;
pub mod desired_state;
pub mod error;
pub mod models;
pub mod reconcile;
pub mod store;

#[cfg(test)]
mod tests;

pub use credential::Credential;
pub use desired_state::DesiredState;
pub use error::{
    ConfigurationError, ConfigurationResult, SecretError, SecretResult, StoreError, StoreResult,
};
pub use models::stored_user::StoredUser;
pub use models::user_attributes::UserAttributes;
pub use models::user_record::UserRecord;
pub use reconcile::reconcile_counts::ReconcileCounts;
pub use reconcile::reconcile_report::ReconcileReport;
pub use reconcile::reconciler::Reconciler;
pub use reconcile::record_outcome::RecordOutcome;
pub use reconcile::record_report::RecordReport;
pub use store::UserStore;
