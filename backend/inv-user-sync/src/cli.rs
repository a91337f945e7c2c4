use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "inv-user-sync")]
#[command(about = "Reconcile application users with a declarative desired state")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Shared config file (default: $INV_CONFIG_DIR/config.toml, else ./.inv/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub sync: SyncArgs,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Apply the desired state to the user store (default)
    Sync(SyncArgs),

    /// Provision the user table and exit
    Migrate,
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncArgs {
    /// Desired-state JSON, overrides users.desired_state
    #[arg(long, value_name = "FILE")]
    pub users: Option<PathBuf>,

    /// Report what would change without writing
    #[arg(long)]
    pub dry_run: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl SyncArgs {
    /// Combine flags given before and after the `sync` subcommand.
    fn merge(self, other: SyncArgs) -> SyncArgs {
        SyncArgs {
            users: other.users.or(self.users),
            dry_run: self.dry_run || other.dry_run,
            json: self.json || other.json,
        }
    }
}

impl Cli {
    /// The command to run. Without a subcommand the top-level flags drive a
    /// sync; with `sync` they are merged into its own. Sync flags given
    /// alongside `migrate` are a usage error.
    pub fn resolve(self) -> Result<Commands, clap::Error> {
        match self.command {
            None => Ok(Commands::Sync(self.sync)),
            Some(Commands::Sync(args)) => Ok(Commands::Sync(self.sync.merge(args))),
            Some(Commands::Migrate) if self.sync != SyncArgs::default() => {
                Err(Self::command().error(
                    ErrorKind::ArgumentConflict,
                    "--users, --dry-run and --json cannot be used with 'migrate'",
                ))
            }
            Some(Commands::Migrate) => Ok(Commands::Migrate),
        }
    }
}
