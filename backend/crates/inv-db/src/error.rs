use inv_core::StoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid row data: {message} {location}")]
    InvalidRow {
        message: String,
        location: ErrorLocation,
    },

    #[error("User not found: id {id} {location}")]
    UserNotFound { id: i64, location: ErrorLocation },

    #[error("Password hashing failed: {message} {location}")]
    Hashing {
        message: String,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for StoreError {
    #[track_caller]
    fn from(error: DbError) -> Self {
        match &error {
            DbError::Sqlx { source, .. } => match source {
                sqlx::Error::Database(db)
                    if db.is_unique_violation()
                        || db.is_check_violation()
                        || db.is_foreign_key_violation() =>
                {
                    StoreError::constraint(error.to_string())
                }
                sqlx::Error::RowNotFound
                | sqlx::Error::ColumnNotFound(_)
                | sqlx::Error::ColumnDecode { .. }
                | sqlx::Error::Decode(_) => StoreError::corrupt(error.to_string()),
                _ => StoreError::unavailable(error.to_string()),
            },
            DbError::Migration { .. } | DbError::Initialization { .. } => {
                StoreError::unavailable(error.to_string())
            }
            DbError::InvalidRow { .. } | DbError::UserNotFound { .. } => {
                StoreError::corrupt(error.to_string())
            }
            DbError::Hashing { message, .. } => StoreError::hashing(message.clone()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
