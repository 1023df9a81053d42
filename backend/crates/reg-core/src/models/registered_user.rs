use crate::RecordId;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sanitized view of a user record. Never carries the credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredUser {
    pub id: RecordId,
    pub username: String,
    pub created_at: DateTime<Utc>,
}
