use std::fmt;

use serde::Deserialize;

/// Raw registration input, as it arrives from a client.
///
/// Both fields are optional so that an absent field reaches the workflow and
/// is reported as `MissingField` instead of failing deserialization.
#[derive(Clone, Default, Deserialize)]
pub struct RegistrationRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl RegistrationRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }
}

impl fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
