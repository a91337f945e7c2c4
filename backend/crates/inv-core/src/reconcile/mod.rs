pub mod reconcile_counts;
pub mod reconcile_report;
pub mod reconciler;
pub mod record_outcome;
pub mod record_report;
