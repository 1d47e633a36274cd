//! # jotfile-store
//!
//! Persistence and service layer for jotfile.
//!
//! [`JsonFileStore`] owns the raw whole-document read/write of the note
//! collection; [`NoteService`] enforces validation, identity assignment, and
//! newest-first ordering on top of it.

pub mod file_store;
pub mod service;

pub use file_store::{JsonFileStore, NoteStore};
pub use service::NoteService;
