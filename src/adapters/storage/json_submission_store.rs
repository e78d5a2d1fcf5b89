//! JSON File Submission Store Adapter
//!
//! Keeps the whole record-set in a single JSON document, keyed by user
//! identifier. Writes go to a uniquely named temp file in the same directory
//! which is synced and then persisted over the data file, so readers never
//! observe a torn document.

use async_trait::async_trait;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::fs;
use tokio::sync::Mutex;

use crate::domain::foundation::UserId;
use crate::domain::review::{RecordSet, ReviewerProfile, Submission};
use crate::ports::{StoreError, SubmissionStore};

const EMPTY_DOCUMENT: &str = "{}";

/// What the data file held when it was read.
#[derive(Debug)]
enum Contents {
    Records(RecordSet),
    /// Not UTF-8 or not a record-set.
    Corrupt,
}

/// File-backed submission store
#[derive(Debug)]
pub struct JsonSubmissionStore {
    path: PathBuf,
    /// Held by every write to the data file.
    write_lock: Mutex<()>,
}

impl JsonSubmissionStore {
    /// Create a store over `path` without touching the filesystem.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    /// Create a store and make sure the data file exists.
    ///
    /// An absent file is created holding an empty mapping; an existing file
    /// is left untouched.
    pub async fn init<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let store = Self::new(path);
        if fs::try_exists(&store.path).await? {
            return Ok(store);
        }
        if let Some(parent) = store.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        store.write_document(EMPTY_DOCUMENT.as_bytes().to_vec()).await?;
        tracing::info!(path = %store.path.display(), "Data file created");
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn write_document(&self, bytes: Vec<u8>) -> Result<(), StoreError> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || write_atomically(&path, &bytes))
            .await
            .map_err(|err| StoreError::Io(err.to_string()))?
    }

    async fn write_records(&self, records: &RecordSet) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(records)?;
        self.write_document(json).await.map_err(|err| {
            tracing::error!(path = %self.path.display(), error = %err, "Failed to write data file");
            err
        })
    }

    /// Reads the data file. A missing or blank file is an empty record-set;
    /// any other I/O failure is an error.
    async fn read_contents(&self) -> Result<Contents, StoreError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Contents::Records(RecordSet::new()))
            }
            Err(err) => return Err(err.into()),
        };

        let Ok(text) = std::str::from_utf8(&bytes) else {
            tracing::warn!(path = %self.path.display(), "Data file is not valid UTF-8");
            return Ok(Contents::Corrupt);
        };
        if text.trim().is_empty() {
            return Ok(Contents::Records(RecordSet::new()));
        }

        match serde_json::from_str::<RecordSet>(text) {
            Ok(records) => Ok(Contents::Records(records.normalized())),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "Data file is not valid JSON");
                Ok(Contents::Corrupt)
            }
        }
    }

    /// Replaces a corrupt data file with an empty mapping. Caller holds
    /// `write_lock`.
    async fn reinitialize(&self) {
        tracing::warn!(path = %self.path.display(), "Reinitializing data file");
        if let Err(err) = self.write_document(EMPTY_DOCUMENT.as_bytes().to_vec()).await {
            tracing::error!(path = %self.path.display(), error = %err, "Failed to reinitialize data file");
        }
    }
}

fn write_atomically(path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(bytes)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|err| err.error)?;
    Ok(())
}

#[async_trait]
impl SubmissionStore for JsonSubmissionStore {
    async fn load(&self) -> RecordSet {
        match self.read_contents().await {
            Ok(Contents::Records(records)) => return records,
            Ok(Contents::Corrupt) => {}
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "Failed to read data file");
                return RecordSet::new();
            }
        }

        // Re-check under the lock: an append may have replaced the file since.
        let _guard = self.write_lock.lock().await;
        match self.read_contents().await {
            Ok(Contents::Records(records)) => records,
            Ok(Contents::Corrupt) => {
                self.reinitialize().await;
                RecordSet::new()
            }
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "Failed to read data file");
                RecordSet::new()
            }
        }
    }

    async fn save(&self, records: &RecordSet) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        self.write_records(records).await
    }

    async fn append(
        &self,
        user_id: &UserId,
        submission: &Submission,
        profile: &ReviewerProfile,
    ) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut records = match self.read_contents().await {
            Ok(Contents::Records(records)) => records,
            Ok(Contents::Corrupt) => {
                tracing::warn!(path = %self.path.display(), "Discarding corrupt data file");
                RecordSet::new()
            }
            Err(err) => {
                tracing::error!(path = %self.path.display(), error = %err, "Failed to read data file");
                return Err(err);
            }
        };
        records.append(user_id.clone(), submission.clone(), profile);
        self.write_records(&records).await?;
        tracing::info!(
            user_id = %user_id,
            reviews = records.get(user_id).map(|r| r.reviews.len()).unwrap_or_default(),
            "Submission saved"
        );
        Ok(())
    }
}
