//! Record store backed by a single JSON document on disk.
//!
//! ## What this store has to provide itself
//!
//! There is no transaction engine underneath, so the database guarantees are
//! emulated:
//!
//! - **Initialization** happens once, in [`FileRecordStore::open`]. A missing
//!   file is created holding `{"users": []}`. The content is written to a temp
//!   file first and hard-linked into place, which only succeeds if nothing
//!   exists at the path yet, so racing initializers never leave a partial or
//!   clobbered file behind.
//! - **Reads** load and parse the entire collection. A document that does not
//!   parse is `StoreError::Corrupt`; it is never repaired.
//! - **Writes** serialize the entire collection to a sibling temp file and
//!   rename it over the existing file. Readers see either the old or the new file,
//!   never a torn one.
//! - **Create** holds one store-wide mutex across
//!   read -> duplicate check -> append -> write. Every create against the same
//!   store instance is serialized. The critical section runs on its own task,
//!   so dropping the caller's future cannot abandon it halfway.
//!
//! The mutex lives in the process. Two processes (or two `FileRecordStore`
//! instances) writing the same file are NOT serialized against each other.

use crate::stores::user_document::{UserDocument, UsersFile};
use crate::{RecordStore, Result as StoreResult, StoreError};

use reg_core::{NewUser, RecordId, UserFilter, UserLookup, UserRecord};

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info, warn};
use tokio::sync::Mutex;

pub struct FileRecordStore {
    inner: Arc<FileStoreInner>,
}

struct FileStoreInner {
    path: PathBuf,
    write_lock: Mutex<()>,
    closed: AtomicBool,
}

impl FileRecordStore {
    /// Open the store at `path`, creating the file (and parent directories)
    /// if needed. Fails with `Corrupt` if an existing file does not parse.
    pub async fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                StoreError::unavailable(format!(
                    "Failed to create store directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        initialize(&path).await?;

        let users = load(&path).await?;
        info!(
            "File store opened: {} ({} users)",
            path.display(),
            users.len()
        );

        Ok(Self {
            inner: Arc::new(FileStoreInner {
                path,
                write_lock: Mutex::new(()),
                closed: AtomicBool::new(false),
            }),
        })
    }

    pub fn path(&self) -> &Path {
        &self.inner.path
    }
}

impl FileStoreInner {
    #[track_caller]
    fn ensure_open(&self) -> StoreResult<()> {
        if self.closed.load(Ordering::Acquire) {
            return Err(StoreError::unavailable(format!(
                "file store {} is closed",
                self.path.display()
            )));
        }
        Ok(())
    }

    async fn create(&self, candidate: NewUser) -> StoreResult<UserRecord> {
        let _guard = self.write_lock.lock().await;
        self.ensure_open()?;

        let mut users = load(&self.path).await?;

        let (identity, credential) = candidate.into_parts();
        if users.iter().any(|u| u.username == identity) {
            return Err(StoreError::duplicate_identity(identity));
        }

        let mut id = RecordId::generate();
        while users.iter().any(|u| u.id == id.as_str()) {
            warn!(
                "Generated id {} already present in {}, regenerating",
                id,
                self.path.display()
            );
            id = RecordId::generate();
        }

        let record = UserRecord {
            id,
            identity,
            credential,
            created_at: Utc::now(),
        };

        users.push(UserDocument::from(&record));
        persist(&self.path, UsersFile { users }).await?;

        debug!("Appended user {} ({})", record.id, record.identity);
        Ok(record)
    }
}

#[async_trait]
impl RecordStore for FileRecordStore {
    fn backend(&self) -> &'static str {
        "file"
    }

    async fn create(&self, candidate: NewUser) -> StoreResult<UserRecord> {
        self.inner.ensure_open()?;

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move { inner.create(candidate).await })
            .await
            .map_err(|e| {
                StoreError::unavailable(format!("File store create task failed: {}", e))
            })?
    }

    async fn find_one(&self, lookup: &UserLookup) -> StoreResult<Option<UserRecord>> {
        self.inner.ensure_open()?;

        let users = load(&self.inner.path).await?;
        for document in users {
            let record = UserRecord::try_from(document)?;
            if lookup.matches(&record) {
                return Ok(Some(record));
            }
        }

        Ok(None)
    }

    async fn find_many(&self, filter: &UserFilter) -> StoreResult<Vec<UserRecord>> {
        self.inner.ensure_open()?;

        let users = load(&self.inner.path).await?;
        let mut matches = Vec::new();
        for document in users {
            let record = UserRecord::try_from(document)?;
            if filter.matches(&record) {
                matches.push(record);
            }
        }

        Ok(matches)
    }

    async fn close(&self) -> StoreResult<()> {
        let _guard = self.inner.write_lock.lock().await;
        self.inner.closed.store(true, Ordering::Release);
        info!("File store closed: {}", self.inner.path.display());
        Ok(())
    }
}

/// Sibling path used for whole-file writes. Unique per call.
fn temp_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("users.json"));

    path.with_file_name(format!(".{}.{}.tmp", file_name, RecordId::generate()))
}

async fn initialize(path: &Path) -> StoreResult<()> {
    if tokio::fs::try_exists(path).await.map_err(|e| {
        StoreError::unavailable(format!("Failed to stat {}: {}", path.display(), e))
    })? {
        return Ok(());
    }

    let temp = temp_path(path);
    let bytes = UsersFile::default().to_bytes()?;
    tokio::fs::write(&temp, &bytes).await.map_err(|e| {
        StoreError::unavailable(format!("Failed to write {}: {}", temp.display(), e))
    })?;

    // hard_link refuses to replace an existing file: first initializer wins.
    let linked = tokio::fs::hard_link(&temp, path).await;
    let _ = tokio::fs::remove_file(&temp).await;

    match linked {
        Ok(()) => {
            info!("Initialized empty user store at {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(StoreError::unavailable(format!(
            "Failed to initialize {}: {}",
            path.display(),
            e
        ))),
    }
}

async fn load(path: &Path) -> StoreResult<Vec<UserDocument>> {
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        StoreError::unavailable(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let file: UsersFile = serde_json::from_slice(&bytes).map_err(|e| {
        StoreError::corrupt(format!("{} is not a valid user store: {}", path.display(), e))
    })?;

    Ok(file.users)
}

async fn persist(path: &Path, file: UsersFile) -> StoreResult<()> {
    let bytes = file.to_bytes()?;
    let temp = temp_path(path);

    tokio::fs::write(&temp, &bytes).await.map_err(|e| {
        StoreError::unavailable(format!("Failed to write {}: {}", temp.display(), e))
    })?;

    if let Err(e) = tokio::fs::rename(&temp, path).await {
        let _ = tokio::fs::remove_file(&temp).await;
        return Err(StoreError::unavailable(format!(
            "Failed to replace {}: {}",
            path.display(),
            e
        )));
    }

    Ok(())
}
