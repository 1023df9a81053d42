use crate::{RecordId, UserRecord, normalize_identity};

/// Named equality lookups supported by every record store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserLookup {
    Id(RecordId),
    /// Always holds a normalized identity; build it with [`UserLookup::by_identity`].
    Identity(String),
}

impl UserLookup {
    pub fn by_id(id: RecordId) -> Self {
        Self::Id(id)
    }

    pub fn by_identity(identity: &str) -> Self {
        Self::Identity(normalize_identity(identity))
    }

    pub fn matches(&self, record: &UserRecord) -> bool {
        match self {
            Self::Id(id) => record.id == *id,
            Self::Identity(identity) => record.identity == *identity,
        }
    }
}
