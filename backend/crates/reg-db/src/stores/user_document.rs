//! On-disk shape of the file-backed store.
//!
//! ```json
//! {
//!   "users": [
//!     {
//!       "_id": "0006412a1b2c3d9f8e7d6c5b",
//!       "username": "user@example.com",
//!       "password": "$argon2id$v=19$...",
//!       "createdAt": "2026-03-01T12:00:00.123456Z"
//!     }
//!   ]
//! }
//! ```

use crate::{Result as StoreResult, StoreError};

use reg_core::{HashedCredential, RecordId, UserRecord};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct UsersFile {
    pub users: Vec<UserDocument>,
}

impl UsersFile {
    #[track_caller]
    pub fn to_bytes(&self) -> StoreResult<Vec<u8>> {
        serde_json::to_vec_pretty(self)
            .map_err(|e| StoreError::unavailable(format!("Failed to serialize users: {}", e)))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct UserDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub password: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl From<&UserRecord> for UserDocument {
    fn from(record: &UserRecord) -> Self {
        Self {
            id: record.id.to_string(),
            username: record.identity.clone(),
            password: record.credential.as_str().to_string(),
            created_at: record.created_at,
        }
    }
}

impl TryFrom<UserDocument> for UserRecord {
    type Error = StoreError;

    #[track_caller]
    fn try_from(document: UserDocument) -> StoreResult<Self> {
        Ok(UserRecord {
            id: RecordId::new(document.id)?,
            identity: document.username,
            credential: HashedCredential::from_phc(document.password),
            created_at: document.created_at,
        })
    }
}
