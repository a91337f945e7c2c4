use crate::{EXIT_CONFIGURATION, EXIT_STORE, SyncError};

use inv_core::DesiredState;
use inv_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use googletest::assert_that;
use googletest::prelude::eq;

#[test]
fn given_logger_error_when_exit_code_then_configuration() {
    let error = SyncError::logger("cannot open log file");

    assert_that!(error.exit_code(), eq(EXIT_CONFIGURATION));
}

#[test]
fn given_desired_state_error_when_exit_code_then_configuration() {
    let error: SyncError = DesiredState::from_json_str("[]").unwrap_err().into();

    assert_that!(error.exit_code(), eq(EXIT_CONFIGURATION));
}

#[test]
fn given_database_error_when_exit_code_then_store() {
    let error: SyncError = DbError::Initialization {
        message: String::from("disk full"),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    assert_that!(error.exit_code(), eq(EXIT_STORE));
}
