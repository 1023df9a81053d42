pub mod database_record_store;
pub mod file_record_store;
pub mod memory_record_store;

pub(crate) mod user_document;
pub(crate) mod user_row;
