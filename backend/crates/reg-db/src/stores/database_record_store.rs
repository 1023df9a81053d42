//! SQLite-backed record store.
//!
//! Uniqueness and atomicity are the database's job: `users.username` carries a
//! unique index, so the INSERT itself is the authoritative duplicate check.
//! This type only translates between `UserRecord` and rows and maps the
//! unique-constraint failure to `StoreError::DuplicateIdentity`.

use crate::stores::user_row::{USER_COLUMNS, UserRow};
use crate::{RecordStore, Result as StoreResult, StoreError};

use reg_core::{NewUser, RecordId, UserFilter, UserLookup, UserRecord};

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, info};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use uuid::Uuid;

pub struct DatabaseRecordStore {
    pool: SqlitePool,
}

impl DatabaseRecordStore {
    /// Open (creating if missing) the database file and run migrations.
    pub async fn open(
        path: &Path,
        max_connections: u32,
        busy_timeout: Duration,
    ) -> StoreResult<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                StoreError::unavailable(format!(
                    "Failed to create database directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(busy_timeout);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        info!("Database store connected: {}", path.display());

        Self::from_pool(pool).await
    }

    /// Wrap an existing pool. Migrations are run before the store is returned.
    pub async fn from_pool(pool: SqlitePool) -> StoreResult<Self> {
        sqlx::migrate!("./migrations").run(&pool).await?;
        debug!("Database store migrations complete");

        Ok(Self { pool })
    }

    fn where_clause(lookup: &UserLookup) -> (&'static str, &str) {
        match lookup {
            UserLookup::Id(id) => ("id = ?", id.as_str()),
            UserLookup::Identity(identity) => ("username = ?", identity.as_str()),
        }
    }
}

/// Millisecond precision is what the column stores, so the returned record is
/// truncated to match what a later read will see.
fn now_millis() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now)
}

#[async_trait]
impl RecordStore for DatabaseRecordStore {
    fn backend(&self) -> &'static str {
        "database"
    }

    async fn create(&self, candidate: NewUser) -> StoreResult<UserRecord> {
        let (identity, credential) = candidate.into_parts();
        let record = UserRecord {
            id: RecordId::from(Uuid::new_v4()),
            identity,
            credential,
            created_at: now_millis(),
        };

        let result = sqlx::query(
            r#"
                INSERT INTO users (id, username, password, created_at)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(record.id.as_str())
        .bind(&record.identity)
        .bind(record.credential.as_str())
        .bind(record.created_at.timestamp_millis())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => {
                debug!("Inserted user {} ({})", record.id, record.identity);
                Ok(record)
            }
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(StoreError::duplicate_identity(record.identity))
            }
            Err(e) => Err(StoreError::from(e)),
        }
    }

    async fn find_one(&self, lookup: &UserLookup) -> StoreResult<Option<UserRecord>> {
        let (clause, value) = Self::where_clause(lookup);
        let sql = format!(
            "SELECT {} FROM users WHERE {} ORDER BY rowid LIMIT 1",
            USER_COLUMNS, clause
        );

        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await?;

        row.map(UserRecord::try_from).transpose()
    }

    async fn find_many(&self, filter: &UserFilter) -> StoreResult<Vec<UserRecord>> {
        let rows = match filter {
            UserFilter::All => {
                let sql = format!("SELECT {} FROM users ORDER BY rowid", USER_COLUMNS);
                sqlx::query_as::<_, UserRow>(&sql)
                    .fetch_all(&self.pool)
                    .await?
            }
            UserFilter::Matching(lookup) => {
                let (clause, value) = Self::where_clause(lookup);
                let sql = format!(
                    "SELECT {} FROM users WHERE {} ORDER BY rowid",
                    USER_COLUMNS, clause
                );
                sqlx::query_as::<_, UserRow>(&sql)
                    .bind(value)
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        rows.into_iter()
            .map(UserRecord::try_from)
            .collect::<StoreResult<Vec<_>>>()
    }

    async fn close(&self) -> StoreResult<()> {
        self.pool.close().await;
        info!("Database store closed");
        Ok(())
    }
}
