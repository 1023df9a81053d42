//! In-process record store for tests and local experiments. Nothing persists.

use crate::{RecordStore, Result as StoreResult, StoreError};

use reg_core::{NewUser, RecordId, UserFilter, UserLookup, UserRecord};

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    users: RwLock<Vec<UserRecord>>,
    closed: AtomicBool,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[track_caller]
    fn ensure_open(&self) -> StoreResult<()> {
        if self.closed.load(Ordering::Acquire) {
            return Err(StoreError::unavailable("in-memory store is closed"));
        }
        Ok(())
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn create(&self, candidate: NewUser) -> StoreResult<UserRecord> {
        let mut users = self.users.write().await;
        self.ensure_open()?;

        let (identity, credential) = candidate.into_parts();
        if users.iter().any(|u| u.identity == identity) {
            return Err(StoreError::duplicate_identity(identity));
        }

        let record = UserRecord {
            id: RecordId::generate(),
            identity,
            credential,
            created_at: Utc::now(),
        };
        users.push(record.clone());

        Ok(record)
    }

    async fn find_one(&self, lookup: &UserLookup) -> StoreResult<Option<UserRecord>> {
        self.ensure_open()?;
        let users = self.users.read().await;
        Ok(users.iter().find(|u| lookup.matches(u)).cloned())
    }

    async fn find_many(&self, filter: &UserFilter) -> StoreResult<Vec<UserRecord>> {
        self.ensure_open()?;
        let users = self.users.read().await;
        Ok(users.iter().filter(|u| filter.matches(u)).cloned().collect())
    }

    async fn close(&self) -> StoreResult<()> {
        // Taking the write lock waits out any in-flight create.
        let _users = self.users.write().await;
        self.closed.store(true, Ordering::Release);
        Ok(())
    }
}
