#![allow(dead_code)]

//! Test infrastructure for reg-server API tests

use reg_auth::{CredentialHasher, HashingParams, RegistrationWorkflow};
use reg_db::{FileRecordStore, InMemoryRecordStore, RecordStore};
use reg_server::AppState;

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, header};

/// Cheap Argon2 parameters so tests don't spend their time hashing.
pub fn fast_hasher() -> CredentialHasher {
    CredentialHasher::new(HashingParams {
        memory_kib: 1024,
        iterations: 1,
        parallelism: 1,
    })
    .expect("valid test hashing params")
}

pub fn create_state_with(store: Arc<dyn RecordStore>) -> AppState {
    AppState::new(RegistrationWorkflow::new(store, fast_hasher()))
}

/// AppState over an empty in-memory store
pub fn create_test_app_state() -> AppState {
    create_state_with(Arc::new(InMemoryRecordStore::new()))
}

/// AppState over a file store at `path`
pub async fn create_file_app_state(path: &Path) -> AppState {
    let store = FileRecordStore::open(path)
        .await
        .expect("Failed to open file store");
    create_state_with(Arc::new(store))
}

pub fn json_request(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/register")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
