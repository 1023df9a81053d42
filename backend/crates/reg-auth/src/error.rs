use reg_db::StoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistrationError {
    #[error("Missing required field '{field}' {location}")]
    MissingField {
        field: &'static str,
        location: ErrorLocation,
    },

    #[error("Identity is not a valid email address {location}")]
    InvalidIdentity { location: ErrorLocation },

    #[error("Credential does not meet the strength policy {location}")]
    WeakCredential { location: ErrorLocation },

    #[error("Identity already registered: {identity} {location}")]
    DuplicateIdentity {
        identity: String,
        location: ErrorLocation,
    },

    #[error("Store error: {source} {location}")]
    Store {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },

    #[error("Credential hashing failed: {message} {location}")]
    Hashing {
        message: String,
        location: ErrorLocation,
    },
}

/// Transport-independent classification of a registration failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistrationErrorKind {
    MissingField,
    InvalidIdentity,
    WeakCredential,
    DuplicateIdentity,
    StoreUnavailable,
    CorruptStore,
    Hashing,
}

impl RegistrationError {
    #[track_caller]
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField {
            field,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_identity() -> Self {
        Self::InvalidIdentity {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn weak_credential() -> Self {
        Self::WeakCredential {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn duplicate_identity(identity: impl Into<String>) -> Self {
        Self::DuplicateIdentity {
            identity: identity.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn hashing(message: impl Into<String>) -> Self {
        Self::Hashing {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn kind(&self) -> RegistrationErrorKind {
        match self {
            Self::MissingField { .. } => RegistrationErrorKind::MissingField,
            Self::InvalidIdentity { .. } => RegistrationErrorKind::InvalidIdentity,
            Self::WeakCredential { .. } => RegistrationErrorKind::WeakCredential,
            Self::DuplicateIdentity { .. } => RegistrationErrorKind::DuplicateIdentity,
            Self::Store {
                source: StoreError::Corrupt { .. },
                ..
            } => RegistrationErrorKind::CorruptStore,
            Self::Store { .. } => RegistrationErrorKind::StoreUnavailable,
            Self::Hashing { .. } => RegistrationErrorKind::Hashing,
        }
    }

    /// True when the caller supplied bad input, false for internal failures
    pub fn is_client_error(&self) -> bool {
        matches!(
            self.kind(),
            RegistrationErrorKind::MissingField
                | RegistrationErrorKind::InvalidIdentity
                | RegistrationErrorKind::WeakCredential
                | RegistrationErrorKind::DuplicateIdentity
        )
    }
}

impl From<StoreError> for RegistrationError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match source {
            StoreError::DuplicateIdentity { identity, .. } => {
                Self::DuplicateIdentity { identity, location }
            }
            source => Self::Store { source, location },
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistrationError>;
