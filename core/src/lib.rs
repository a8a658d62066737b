#![deny(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

pub mod catalog;
pub mod error;
pub mod models;
pub mod store;

// Re-export commonly used types
pub use catalog::NoteCatalog;
pub use error::{Error, Result};
pub use models::{AddOutcome, ClearOutcome, Entry, Note, RejectReason, RemoveOutcome};
pub use store::{FileStore, MemoryStore, NoteStore, DEFAULT_FILE_NAME};
