pub mod cli;
pub mod error;
pub mod logger;
pub mod run;

#[cfg(test)]
mod tests;

pub use cli::{Cli, Commands, SyncArgs};
pub use error::{Result, SyncError};
pub use run::{load_config, migrate, render, sync};

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_RECORD_FAILED: u8 = 1;
pub const EXIT_CONFIGURATION: u8 = 2;
pub const EXIT_STORE: u8 = 3;
