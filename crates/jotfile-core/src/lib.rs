//! # jotfile-core
//!
//! Core types and errors for jotfile.
//!
//! This crate provides the domain data structures and error taxonomy that
//! the other jotfile crates depend on.

pub mod error;
pub mod models;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::{CreateNoteRequest, Note};
