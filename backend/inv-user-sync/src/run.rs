use crate::cli::SyncArgs;
use crate::error::Result;

use inv_config::Config;
use inv_core::{DesiredState, ReconcileReport, Reconciler};
use inv_db::UserRepository;

use std::path::Path;

use log::{error, info, warn};

/// Load and validate the shared config. An explicit file must exist; without
/// one the default config directory is used.
pub fn load_config(config_file: Option<&Path>) -> Result<Config> {
    let config = match config_file {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    config.validate()?;

    Ok(config)
}

/// Create the database if needed and provision the user table.
pub async fn migrate(config: &Config) -> Result<()> {
    let database_path = config.database_path();
    info!("Connecting to database: {}", database_path.display());

    let pool = inv_db::connect(&database_path, config.busy_timeout(), true).await?;
    inv_db::migrate(&pool).await?;
    pool.close().await;

    Ok(())
}

/// Run one reconciliation pass.
///
/// The desired state is fully loaded and validated before the database is
/// opened. A dry run never creates or migrates the database.
pub async fn sync(config: &Config, args: &SyncArgs) -> Result<ReconcileReport> {
    let users_path = args
        .users
        .clone()
        .unwrap_or_else(|| config.desired_state_path());
    info!("Loading desired state from {}", users_path.display());

    let desired = DesiredState::load(&users_path)?;
    info!("Desired state declares {} user(s)", desired.len());

    let provision = config.database.auto_migrate && !args.dry_run;
    let database_path = config.database_path();
    info!("Connecting to database: {}", database_path.display());

    let pool = inv_db::connect(&database_path, config.busy_timeout(), provision).await?;
    if provision {
        inv_db::migrate(&pool).await?;
    }

    let repository = UserRepository::new(pool.clone());
    let report = Reconciler::new(&repository)
        .dry_run(args.dry_run)
        .reconcile(&desired)
        .await?;
    pool.close().await;

    let counts = report.counts();
    if let Some(reason) = &report.aborted {
        error!("Reconciliation aborted: {}", reason);
    } else if report.has_failures() {
        warn!("{} record(s) failed", counts.failed);
    } else {
        info!(
            "Reconciliation complete: {} created, {} updated, {} unchanged",
            counts.created, counts.updated, counts.unchanged
        );
    }

    Ok(report)
}

/// Render the report for stdout.
pub fn render(report: &ReconcileReport, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(report)?)
    } else {
        Ok(report.to_string())
    }
}
