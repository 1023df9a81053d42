//! User record - the persisted representation of a registered user.

use crate::{HashedCredential, RecordId, RegisteredUser};

use chrono::{DateTime, Utc};

/// A persisted user.
///
/// Stores hand out owned copies; nothing outside a store holds a reference
/// into its state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: RecordId,
    /// Normalized (lower-cased) email-shaped identity, unique per store
    pub identity: String,
    pub credential: HashedCredential,
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    /// Strip the credential for handing back to callers.
    pub fn sanitize(&self) -> RegisteredUser {
        RegisteredUser {
            id: self.id.clone(),
            username: self.identity.clone(),
            created_at: self.created_at,
        }
    }
}
