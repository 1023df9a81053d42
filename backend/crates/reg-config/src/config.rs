use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR_NAME,
    DatabaseConfig, FileStoreConfig, HashingConfig, LoggingConfig, ServerConfig, StoreBackend,
    StoreConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub database: DatabaseConfig,
    pub file_store: FileStoreConfig,
    pub hashing: HashingConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for REG_CONFIG_DIR env var, else use ./.reg/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply REG_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: REG_CONFIG_DIR env var > ./.reg/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.hashing.validate()?;

        // Store files must stay inside the config dir
        if !is_contained_relative_path(&self.database.path) {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }
        if !is_contained_relative_path(&self.file_store.path) {
            return Err(ConfigError::file_store(
                "file_store.path must be relative and cannot contain '..'",
            ));
        }

        if let Some(file) = &self.logging.file
            && file.trim().is_empty()
        {
            return Err(ConfigError::logging("logging.file cannot be empty"));
        }

        Ok(())
    }

    /// Path of the configured backend's data file, resolved against `config_dir`.
    pub fn store_path(&self, config_dir: &Path) -> PathBuf {
        match self.store.backend {
            StoreBackend::Database => config_dir.join(&self.database.path),
            StoreBackend::File => config_dir.join(&self.file_store.path),
        }
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  store: {}", self.store.backend);

        match self.store.backend {
            StoreBackend::Database => info!(
                "  database: {} (max {} connections, busy timeout {}s)",
                self.database.path, self.database.max_connections, self.database.busy_timeout_secs
            ),
            StoreBackend::File => info!("  file_store: {}", self.file_store.path),
        }

        info!(
            "  hashing: argon2id m={}KiB t={} p={}",
            self.hashing.memory_kib, self.hashing.iterations, self.hashing.parallelism
        );

        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("REG_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("REG_SERVER_PORT", &mut self.server.port);

        // Store
        Self::apply_env_parse("REG_STORE_BACKEND", &mut self.store.backend);

        // Database
        Self::apply_env_string("REG_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "REG_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );
        Self::apply_env_parse(
            "REG_DATABASE_BUSY_TIMEOUT_SECS",
            &mut self.database.busy_timeout_secs,
        );

        // File store
        Self::apply_env_string("REG_FILE_STORE_PATH", &mut self.file_store.path);

        // Hashing
        Self::apply_env_parse("REG_HASH_MEMORY_KIB", &mut self.hashing.memory_kib);
        Self::apply_env_parse("REG_HASH_ITERATIONS", &mut self.hashing.iterations);
        Self::apply_env_parse("REG_HASH_PARALLELISM", &mut self.hashing.parallelism);

        // Logging
        Self::apply_env_parse("REG_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("REG_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("REG_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}

fn is_contained_relative_path(path: &str) -> bool {
    !path.trim().is_empty() && !Path::new(path).is_absolute() && !path.contains("..")
}
