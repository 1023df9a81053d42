//! The persistence contract every user-record backend implements.
//!
//! ## Guarantees
//!
//! - `create` checks identity uniqueness and writes as one atomic step. Two
//!   concurrent creates of the same identity against one store: at most one
//!   succeeds, the other gets `StoreError::DuplicateIdentity` and nothing is
//!   written for it.
//! - `find_one` / `find_many` never fail because nothing matched. They may
//!   return stale data while a create is in flight; there is no
//!   read-your-writes guarantee across callers.
//! - Returned records are owned snapshots.
//! - After `close`, every operation fails with `StoreError::Unavailable`.

use crate::Result as StoreResult;

use reg_core::{NewUser, UserFilter, UserLookup, UserRecord};

use async_trait::async_trait;

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Short backend name for logs and health output
    fn backend(&self) -> &'static str;

    /// Persist a candidate, assigning `id` and `created_at`.
    async fn create(&self, candidate: NewUser) -> StoreResult<UserRecord>;

    /// First record in natural (insertion) order matching the lookup.
    async fn find_one(&self, lookup: &UserLookup) -> StoreResult<Option<UserRecord>>;

    /// Every matching record in natural order.
    async fn find_many(&self, filter: &UserFilter) -> StoreResult<Vec<UserRecord>>;

    /// End the store's lifecycle. Waits for an in-flight create to finish.
    async fn close(&self) -> StoreResult<()>;
}
