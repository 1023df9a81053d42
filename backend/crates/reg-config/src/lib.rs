mod config;
mod database_config;
mod error;
mod file_store_config;
mod hashing_config;
mod log_level;
mod logging_config;
mod server_config;
mod store_backend;
mod store_config;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use file_store_config::FileStoreConfig;
pub use hashing_config::HashingConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use store_backend::StoreBackend;
pub use store_config::StoreConfig;

#[cfg(test)]
mod tests;

const CONFIG_DIR_ENV: &str = "REG_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".reg";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const MIN_PORT: u16 = 1024;

const DEFAULT_STORE_BACKEND: StoreBackend = StoreBackend::Database;

const DEFAULT_DATABASE_FILENAME: &str = "users.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;
const MIN_DATABASE_MAX_CONNECTIONS: u32 = 1;
const MAX_DATABASE_MAX_CONNECTIONS: u32 = 100;
const DEFAULT_DATABASE_BUSY_TIMEOUT_SECS: u64 = 5;
const MAX_DATABASE_BUSY_TIMEOUT_SECS: u64 = 300;

const DEFAULT_FILE_STORE_FILENAME: &str = "db.json";

// Argon2 crate defaults (OWASP minimum for Argon2id)
const DEFAULT_HASH_MEMORY_KIB: u32 = 19_456;
const DEFAULT_HASH_ITERATIONS: u32 = 2;
const DEFAULT_HASH_PARALLELISM: u32 = 1;
const MIN_HASH_MEMORY_KIB_PER_LANE: u32 = 8;
const MAX_HASH_MEMORY_KIB: u32 = 1_048_576;
const MIN_HASH_ITERATIONS: u32 = 1;
const MAX_HASH_ITERATIONS: u32 = 10;
const MIN_HASH_PARALLELISM: u32 = 1;
const MAX_HASH_PARALLELISM: u32 = 16;

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
