//! Builds the configured record store. The backend is chosen by
//! `[store] backend`, never detected from what exists on disk.

use crate::ServerResult;

use reg_config::{Config, StoreBackend};
use reg_db::{DatabaseRecordStore, FileRecordStore, RecordStore};

use std::path::Path;
use std::sync::Arc;

use log::info;

/// Open the configured store, resolving its path against the config directory.
pub async fn open_store(config: &Config) -> ServerResult<Arc<dyn RecordStore>> {
    open_store_in(config, &Config::config_dir()?).await
}

pub async fn open_store_in(config: &Config, config_dir: &Path) -> ServerResult<Arc<dyn RecordStore>> {
    let path = config.store_path(config_dir);
    info!("Opening {} store: {}", config.store.backend, path.display());

    let store: Arc<dyn RecordStore> = match config.store.backend {
        StoreBackend::Database => Arc::new(
            DatabaseRecordStore::open(
                &path,
                config.database.max_connections,
                config.database.busy_timeout(),
            )
            .await?,
        ),
        StoreBackend::File => Arc::new(FileRecordStore::open(path).await?),
    };

    Ok(store)
}
