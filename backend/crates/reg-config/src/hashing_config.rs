use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_HASH_ITERATIONS, DEFAULT_HASH_MEMORY_KIB,
    DEFAULT_HASH_PARALLELISM, MAX_HASH_ITERATIONS, MAX_HASH_MEMORY_KIB, MAX_HASH_PARALLELISM,
    MIN_HASH_ITERATIONS, MIN_HASH_MEMORY_KIB_PER_LANE, MIN_HASH_PARALLELISM,
};

use serde::Deserialize;

/// Argon2id work factor
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HashingConfig {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            memory_kib: DEFAULT_HASH_MEMORY_KIB,
            iterations: DEFAULT_HASH_ITERATIONS,
            parallelism: DEFAULT_HASH_PARALLELISM,
        }
    }
}

impl HashingConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.parallelism < MIN_HASH_PARALLELISM || self.parallelism > MAX_HASH_PARALLELISM {
            return Err(ConfigError::hashing(format!(
                "hashing.parallelism must be {}-{}, got {}",
                MIN_HASH_PARALLELISM, MAX_HASH_PARALLELISM, self.parallelism
            )));
        }

        if self.iterations < MIN_HASH_ITERATIONS || self.iterations > MAX_HASH_ITERATIONS {
            return Err(ConfigError::hashing(format!(
                "hashing.iterations must be {}-{}, got {}",
                MIN_HASH_ITERATIONS, MAX_HASH_ITERATIONS, self.iterations
            )));
        }

        // Argon2 needs at least 8 KiB per lane
        let min_memory = MIN_HASH_MEMORY_KIB_PER_LANE * self.parallelism;
        if self.memory_kib < min_memory || self.memory_kib > MAX_HASH_MEMORY_KIB {
            return Err(ConfigError::hashing(format!(
                "hashing.memory_kib must be {}-{}, got {}",
                min_memory, MAX_HASH_MEMORY_KIB, self.memory_kib
            )));
        }

        Ok(())
    }
}
