use crate::DEFAULT_FILE_STORE_FILENAME;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FileStoreConfig {
    /// JSON document, relative to the config directory
    pub path: String,
}

impl Default for FileStoreConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_FILE_STORE_FILENAME),
        }
    }
}
