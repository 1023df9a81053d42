use crate::HashedCredential;

/// Lower-case an identity. Identities are compared and stored in this form.
pub fn normalize_identity(raw: &str) -> String {
    raw.to_lowercase()
}

/// Candidate record handed to a store's `create`.
///
/// Only [`NewUser::new`] builds one, so every candidate a store sees carries a
/// normalized identity. The store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    identity: String,
    credential: HashedCredential,
}

impl NewUser {
    pub fn new(identity: &str, credential: HashedCredential) -> Self {
        Self {
            identity: normalize_identity(identity),
            credential,
        }
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn credential(&self) -> &HashedCredential {
        &self.credential
    }

    pub fn into_parts(self) -> (String, HashedCredential) {
        (self.identity, self.credential)
    }
}
