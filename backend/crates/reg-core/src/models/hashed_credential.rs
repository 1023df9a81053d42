use std::fmt;

use serde::{Deserialize, Serialize};

/// A one-way credential digest in PHC string format
/// (`$argon2id$v=19$m=...,t=...,p=...$<salt>$<hash>`).
///
/// Never holds plaintext. `Debug` is redacted so records can be logged.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HashedCredential(String);

impl HashedCredential {
    pub fn from_phc(phc: impl Into<String>) -> Self {
        Self(phc.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for HashedCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HashedCredential(<redacted>)")
    }
}
