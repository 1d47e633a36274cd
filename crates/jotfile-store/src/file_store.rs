//! File-backed note storage.
//!
//! The whole note collection lives in a single pretty-printed JSON document.
//! Every call is whole-document in, whole-document out: no partial writes are
//! exposed to callers. Writes go through a temp file + rename so readers
//! never observe a torn document.

use async_trait::async_trait;
use jotfile_core::{Note, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};
use uuid::Uuid;

/// Storage trait for the persisted note collection.
///
/// Allows abstracting over the filesystem store for tests or alternative
/// backends.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Load the full ordered collection.
    ///
    /// If the backing document does not exist it is created containing an
    /// empty array and an empty vec is returned. Any other read or parse
    /// failure surfaces as an error.
    async fn load(&self) -> Result<Vec<Note>>;

    /// Serialize the full given collection and overwrite the backing document.
    async fn save(&self, notes: &[Note]) -> Result<()>;
}

/// Filesystem store keeping the collection in one JSON file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the given file path.
    ///
    /// The file is not touched until the first `load` or `save`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn write_atomic(&self, data: &[u8]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.map_err(|e| {
                    warn!(parent = %parent.display(), error = %e, "file_store: create_dir_all failed");
                    e
                })?;
            }
        }

        // Atomic write: temp file + rename. The temp name is unique per
        // write so two writers can never rename each other's file away.
        let temp_path = self.path.with_extension(format!("{}.tmp", Uuid::now_v7()));
        let mut file = fs::File::create(&temp_path).await.map_err(|e| {
            warn!(temp_path = %temp_path.display(), error = %e, "file_store: File::create failed");
            e
        })?;
        file.write_all(data).await?;
        file.sync_all().await?;
        drop(file);

        fs::rename(&temp_path, &self.path).await.map_err(|e| {
            warn!(from = %temp_path.display(), to = %self.path.display(), error = %e, "file_store: rename failed");
            e
        })?;

        Ok(())
    }
}

#[async_trait]
impl NoteStore for JsonFileStore {
    async fn load(&self) -> Result<Vec<Note>> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "file_store: creating empty document");
                self.save(&[]).await?;
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let notes: Vec<Note> = serde_json::from_slice(&bytes)?;
        debug!(path = %self.path.display(), count = notes.len(), "file_store: load");
        Ok(notes)
    }

    async fn save(&self, notes: &[Note]) -> Result<()> {
        let data = serde_json::to_vec_pretty(notes)?;
        self.write_atomic(&data).await?;
        debug!(path = %self.path.display(), count = notes.len(), "file_store: save");
        Ok(())
    }
}
