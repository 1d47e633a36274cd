//! Note service: validation, identity assignment, ordering policy.

use chrono::Utc;
use jotfile_core::{CreateNoteRequest, Error, Note, Result};
use tokio::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

use crate::file_store::NoteStore;

/// Service applying validation and id/timestamp assignment on top of a
/// [`NoteStore`].
///
/// Every mutation is a full load-modify-save cycle against the shared
/// document. All operations serialize behind one in-process mutex: `load`
/// can create a missing document, so reads take the lock too. Two
/// concurrent callers can never silently discard each other's write.
pub struct NoteService {
    store: Box<dyn NoteStore>,
    write_lock: Mutex<()>,
}

impl NoteService {
    /// Create a service over the given store.
    pub fn new(store: impl NoteStore + 'static) -> Self {
        Self {
            store: Box::new(store),
            write_lock: Mutex::new(()),
        }
    }

    /// List all notes, newest first.
    pub async fn list(&self) -> Result<Vec<Note>> {
        let _guard = self.write_lock.lock().await;
        self.store.load().await
    }

    /// Create a note and prepend it to the collection.
    ///
    /// The title must be non-empty after trimming; content is trimmed and
    /// defaults to the empty string. Ids are UUIDv7, time-ordered and
    /// collision-resistant under rapid successive calls.
    pub async fn create(&self, req: CreateNoteRequest) -> Result<Note> {
        let title = req.title.as_deref().unwrap_or("").trim().to_string();
        if title.is_empty() {
            return Err(Error::InvalidInput("title required".to_string()));
        }
        let content = req.content.as_deref().unwrap_or("").trim().to_string();

        let now = Utc::now();
        let note = Note {
            id: Uuid::now_v7(),
            title,
            content,
            created_at: now,
            updated_at: now,
        };

        let _guard = self.write_lock.lock().await;
        let mut notes = self.store.load().await?;
        notes.insert(0, note.clone());
        self.store.save(&notes).await?;

        info!(note_id = %note.id, count = notes.len(), "note created");
        Ok(note)
    }

    /// Delete the note with the given id.
    ///
    /// When no note matches, the backing document is left untouched.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut notes = self.store.load().await?;

        let before = notes.len();
        notes.retain(|note| note.id != id);
        if notes.len() == before {
            debug!(note_id = %id, "delete: no matching note");
            return Err(Error::NoteNotFound(id));
        }

        self.store.save(&notes).await?;
        info!(note_id = %id, count = notes.len(), "note deleted");
        Ok(())
    }
}
