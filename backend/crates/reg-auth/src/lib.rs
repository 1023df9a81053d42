pub mod credential_hasher;
pub mod error;
pub mod registration_request;
pub mod registration_workflow;
pub mod validation;

pub use credential_hasher::{CredentialHasher, HashingParams};
pub use error::{RegistrationError, RegistrationErrorKind, Result};
pub use registration_request::RegistrationRequest;
pub use registration_workflow::RegistrationWorkflow;
pub use validation::{
    CREDENTIAL_SYMBOLS, MIN_CREDENTIAL_LENGTH, validate_credential_strength, validate_identity,
};

#[cfg(test)]
mod tests;
