//! inv-user-sync - declarative user reconciler
//!
//! Brings the application's user table in line with a JSON desired state.
//! Users missing from the file are never deleted.
//!
//! # Examples
//!
//! ```bash
//! # Provision the user table before first start
//! inv-user-sync migrate
//!
//! # Preview, then apply
//! inv-user-sync --dry-run --users provisioning/users.json
//! inv-user-sync sync --json
//! ```

use inv_user_sync::{Cli, Commands, SyncError, logger};

use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let config_file = cli.config.clone();
    let command = match cli.resolve() {
        Ok(command) => command,
        Err(e) => e.exit(),
    };

    let config = match inv_user_sync::load_config(config_file.as_deref()) {
        Ok(config) => config,
        Err(e) => return fail(e),
    };

    // Initialize logger (before any other logging)
    if let Err(e) = logger::initialize_from(&config) {
        return fail(e);
    }

    info!("Starting inv-user-sync v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    match command {
        Commands::Migrate => match inv_user_sync::migrate(&config).await {
            Ok(()) => ExitCode::from(inv_user_sync::EXIT_SUCCESS),
            Err(e) => fail(e),
        },
        Commands::Sync(args) => {
            let report = match inv_user_sync::sync(&config, &args).await {
                Ok(report) => report,
                Err(e) => return fail(e),
            };

            match inv_user_sync::render(&report, args.json) {
                Ok(output) => {
                    println!("{}", output);
                    ExitCode::from(report.exit_status())
                }
                Err(e) => fail(e),
            }
        }
    }
}

fn fail(e: SyncError) -> ExitCode {
    error!("{}", e);
    eprintln!("Error: {}", e);
    ExitCode::from(e.exit_code())
}
