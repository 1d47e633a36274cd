//! Core data models for jotfile.
//!
//! These types are shared across all jotfile crates and represent the note
//! domain entities. Serde field names are camelCase to match the persisted
//! document layout and HTTP body shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single note.
///
/// Notes are stored newest-first in one JSON document; `created_at` and
/// `updated_at` are set equal at creation and never diverge (there is no
/// edit operation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating a note.
///
/// Both fields are optional at the wire level; validation (non-empty title
/// after trimming) happens in the service, so a missing title reports
/// "title required" rather than a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateNoteRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl CreateNoteRequest {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
        }
    }
}
