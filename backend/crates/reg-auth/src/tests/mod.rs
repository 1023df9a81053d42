
use crate::{CredentialHasher, HashingParams};

/// Cheap Argon2 parameters so tests don't spend their time hashing.
pub(crate) fn fast_hasher() -> CredentialHasher {
    CredentialHasher::new(HashingParams {
        memory_kib: 1024,
        iterations: 1,
        parallelism: 1,
    })
    .unwrap()
}
