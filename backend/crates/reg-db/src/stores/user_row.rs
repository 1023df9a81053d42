use crate::{Result as StoreResult, StoreError};

use reg_core::{HashedCredential, RecordId, UserRecord};

use chrono::DateTime;
use sqlx::FromRow;

/// Column list shared by every SELECT against `users`.
pub(crate) const USER_COLUMNS: &str = "id, username, password, created_at";

#[derive(Debug, FromRow)]
pub(crate) struct UserRow {
    pub id: String,
    pub username: String,
    pub password: String,
    /// Epoch milliseconds
    pub created_at: i64,
}

impl TryFrom<UserRow> for UserRecord {
    type Error = StoreError;

    #[track_caller]
    fn try_from(row: UserRow) -> StoreResult<Self> {
        let created_at = DateTime::from_timestamp_millis(row.created_at).ok_or_else(|| {
            StoreError::corrupt(format!(
                "Invalid timestamp in users.created_at: {}",
                row.created_at
            ))
        })?;

        Ok(UserRecord {
            id: RecordId::new(row.id)?,
            identity: row.username,
            credential: HashedCredential::from_phc(row.password),
            created_at,
        })
    }
}
