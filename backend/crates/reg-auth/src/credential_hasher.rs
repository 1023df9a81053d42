//! One-way credential hashing with Argon2id.
//!
//! Output is a PHC string (`$argon2id$v=19$m=...,t=...,p=...$<salt>$<hash>`)
//! carrying its own salt and parameters, so verification needs nothing else.

use crate::{RegistrationError, Result as RegistrationErrorResult};

use reg_core::HashedCredential;

use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use rand::RngCore;

/// Salt bytes drawn per hash
pub const SALT_LENGTH: usize = 16;

/// Argon2 work factor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashingParams {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for HashingParams {
    fn default() -> Self {
        Self {
            memory_kib: Params::DEFAULT_M_COST,
            iterations: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CredentialHasher {
    params: Params,
}

impl CredentialHasher {
    /// Fails if the parameters are outside what Argon2 accepts.
    #[track_caller]
    pub fn new(params: HashingParams) -> RegistrationErrorResult<Self> {
        let params = Params::new(
            params.memory_kib,
            params.iterations,
            params.parallelism,
            None,
        )
        .map_err(|e| RegistrationError::hashing(format!("Invalid Argon2 parameters: {}", e)))?;

        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hash `plaintext` with a fresh random salt.
    #[track_caller]
    pub fn hash(&self, plaintext: &str) -> RegistrationErrorResult<HashedCredential> {
        let mut salt_bytes = [0u8; SALT_LENGTH];
        rand::rng().fill_bytes(&mut salt_bytes);

        let salt = SaltString::encode_b64(&salt_bytes)
            .map_err(|e| RegistrationError::hashing(format!("Failed to encode salt: {}", e)))?;

        let hash = self
            .argon2()
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| RegistrationError::hashing(e.to_string()))?;

        Ok(HashedCredential::from_phc(hash.to_string()))
    }

    /// Whether `plaintext` produces `hashed` under its embedded salt and
    /// parameters. A malformed PHC string is an error, not a mismatch.
    #[track_caller]
    pub fn verify(
        &self,
        plaintext: &str,
        hashed: &HashedCredential,
    ) -> RegistrationErrorResult<bool> {
        let parsed = PasswordHash::new(hashed.as_str())
            .map_err(|e| RegistrationError::hashing(format!("Malformed credential hash: {}", e)))?;

        match self.argon2().verify_password(plaintext.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(RegistrationError::hashing(e.to_string())),
        }
    }
}

impl Default for CredentialHasher {
    fn default() -> Self {
        Self {
            params: Params::default(),
        }
    }
}
