//! Registration use case: validate, check uniqueness, hash, persist.
//!
//! Steps run in order and stop at the first failure. Nothing is written
//! unless every check before `create` passed.

use crate::{
    CredentialHasher, RegistrationError, RegistrationRequest, Result as RegistrationErrorResult,
    validate_credential_strength, validate_identity,
};

use reg_core::{HashedCredential, NewUser, RegisteredUser, UserLookup, normalize_identity};
use reg_db::RecordStore;

use std::sync::Arc;

use log::{debug, error, info, warn};

pub struct RegistrationWorkflow {
    store: Arc<dyn RecordStore>,
    hasher: CredentialHasher,
}

impl RegistrationWorkflow {
    pub fn new(store: Arc<dyn RecordStore>, hasher: CredentialHasher) -> Self {
        Self { store, hasher }
    }

    pub fn store(&self) -> &Arc<dyn RecordStore> {
        &self.store
    }

    pub async fn register(
        &self,
        request: RegistrationRequest,
    ) -> RegistrationErrorResult<RegisteredUser> {
        let result = self.run(request).await;

        match &result {
            Ok(user) => info!("Registered user {} ({})", user.id, user.username),
            Err(e) if e.is_client_error() => warn!("Registration rejected: {}", e),
            Err(e) => error!("Registration failed: {}", e),
        }

        result
    }

    async fn run(&self, request: RegistrationRequest) -> RegistrationErrorResult<RegisteredUser> {
        let username = request
            .username
            .filter(|u| !u.is_empty())
            .ok_or_else(|| RegistrationError::missing_field("username"))?;
        let password = request
            .password
            .filter(|p| !p.is_empty())
            .ok_or_else(|| RegistrationError::missing_field("password"))?;

        if !validate_identity(&username) {
            return Err(RegistrationError::invalid_identity());
        }
        if !validate_credential_strength(&password) {
            return Err(RegistrationError::weak_credential());
        }

        let identity = normalize_identity(&username);

        // Skips hashing for the common duplicate case. `create` still decides.
        if self
            .store
            .find_one(&UserLookup::by_identity(&identity))
            .await?
            .is_some()
        {
            return Err(RegistrationError::duplicate_identity(identity));
        }

        let credential = self.hash(password).await?;
        debug!("Credential hashed for {}", identity);

        let record = self
            .store
            .create(NewUser::new(&identity, credential))
            .await?;

        Ok(record.sanitize())
    }

    async fn hash(&self, password: String) -> RegistrationErrorResult<HashedCredential> {
        let hasher = self.hasher.clone();

        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| RegistrationError::hashing(format!("Hashing task failed: {}", e)))?
    }
}
