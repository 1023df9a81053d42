pub mod error;
pub mod record_store;
pub mod stores;

pub use error::{Result, StoreError};
pub use record_store::RecordStore;
pub use stores::database_record_store::DatabaseRecordStore;
pub use stores::file_record_store::FileRecordStore;
pub use stores::memory_record_store::InMemoryRecordStore;
