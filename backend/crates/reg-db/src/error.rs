use std::panic::Location;

use error_location::ErrorLocation;
use reg_core::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Identity already exists: {identity} {location}")]
    DuplicateIdentity {
        identity: String,
        location: ErrorLocation,
    },

    #[error("Store unavailable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },

    #[error("Store corrupt: {message} {location}")]
    Corrupt {
        message: String,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn duplicate_identity<S: Into<String>>(identity: S) -> Self {
        Self::DuplicateIdentity {
            identity: identity.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unavailable<S: Into<String>>(message: S) -> Self {
        Self::Unavailable {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn corrupt<S: Into<String>>(message: S) -> Self {
        Self::Corrupt {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Classify driver errors. Unique violations are handled where the identity
/// is known (see `DatabaseRecordStore::create`), so they never reach here
/// as a duplicate.
impl From<sqlx::Error> for StoreError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match &source {
            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::Decode(_)
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::TypeNotFound { .. } => Self::Corrupt {
                message: source.to_string(),
                location,
            },
            _ => Self::Unavailable {
                message: source.to_string(),
                location,
            },
        }
    }
}

impl From<sqlx::migrate::MigrateError> for StoreError {
    #[track_caller]
    fn from(source: sqlx::migrate::MigrateError) -> Self {
        Self::Migration {
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Core errors only surface while decoding persisted data.
impl From<CoreError> for StoreError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::corrupt(source.to_string())
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
