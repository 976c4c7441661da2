//! Storage abstraction for persistence.
//!
//! The host owns the persistence format; these backends round-trip the
//! scene document as JSON, which preserves every element variant and its
//! style options.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::scene::SceneDocument;
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("document not found: {0}")]
    NotFound(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("io error: {0}")]
    Io(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for scene document storage backends.
pub trait Storage {
    /// Persist a document under the given id.
    fn save(&self, id: &str, document: &SceneDocument) -> StorageResult<()>;

    /// Load the document stored under the given id.
    fn load(&self, id: &str) -> StorageResult<SceneDocument>;

    /// Delete the document stored under the given id, if present.
    fn delete(&self, id: &str) -> StorageResult<()>;

    /// List the ids of all stored documents.
    fn list(&self) -> StorageResult<Vec<String>>;
}
