//! In-memory storage implementation.

use super::{Storage, StorageError, StorageResult};
use crate::scene::SceneDocument;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory storage keeping serialized documents in a map.
///
/// Useful for tests and as a session-local cache.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    documents: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn save(&self, id: &str, document: &SceneDocument) -> StorageResult<()> {
        let json = document
            .to_json()
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        let mut documents = self
            .documents
            .lock()
            .map_err(|e| StorageError::Io(e.to_string()))?;
        documents.insert(id.to_string(), json);
        Ok(())
    }

    fn load(&self, id: &str) -> StorageResult<SceneDocument> {
        let documents = self
            .documents
            .lock()
            .map_err(|e| StorageError::Io(e.to_string()))?;
        let json = documents
            .get(id)
            .ok_or_else(|| StorageError::NotFound(id.to_string()))?;
        SceneDocument::from_json(json).map_err(|e| StorageError::Serialization(e.to_string()))
    }

    fn delete(&self, id: &str) -> StorageResult<()> {
        let mut documents = self
            .documents
            .lock()
            .map_err(|e| StorageError::Io(e.to_string()))?;
        documents.remove(id);
        Ok(())
    }

    fn list(&self) -> StorageResult<Vec<String>> {
        let documents = self
            .documents
            .lock()
            .map_err(|e| StorageError::Io(e.to_string()))?;
        let mut ids: Vec<String> = documents.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }
}
