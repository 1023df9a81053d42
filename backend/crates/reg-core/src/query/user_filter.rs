use crate::{UserLookup, UserRecord};

/// Filter for `find_many`.
///
/// Matching everything is an explicit variant; there is no "empty query".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserFilter {
    All,
    Matching(UserLookup),
}

impl UserFilter {
    pub fn matches(&self, record: &UserRecord) -> bool {
        match self {
            Self::All => true,
            Self::Matching(lookup) => lookup.matches(record),
        }
    }
}

impl From<UserLookup> for UserFilter {
    fn from(lookup: UserLookup) -> Self {
        Self::Matching(lookup)
    }
}
