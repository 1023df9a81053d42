use crate::{DEFAULT_STORE_BACKEND, StoreBackend};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub backend: StoreBackend,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: DEFAULT_STORE_BACKEND,
        }
    }
}
