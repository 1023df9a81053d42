use reg_db::DatabaseRecordStore;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool. Migrations run when the store wraps it.
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool")
}

pub async fn create_test_store() -> DatabaseRecordStore {
    DatabaseRecordStore::from_pool(create_test_pool().await)
        .await
        .expect("Failed to run migrations")
}
