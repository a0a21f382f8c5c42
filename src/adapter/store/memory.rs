//! In-memory store implementation for testing.

use std::collections::{BTreeMap, BTreeSet};
use std::io;

use parking_lot::RwLock;

use crate::error::StorageError;
use crate::port::DocumentStore;

/// In-memory document store.
///
/// Writes to documents registered with [`MemoryStore::fail_writes_to`] fail
/// with an I/O error, which lets tests exercise partial rollovers.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: RwLock<BTreeMap<String, String>>,
    failing: RwLock<BTreeSet<String>>,
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write to `name` fail.
    pub fn fail_writes_to(&self, name: impl Into<String>) {
        self.failing.write().insert(name.into());
    }

    /// Let writes to `name` succeed again.
    pub fn heal(&self, name: &str) {
        self.failing.write().remove(name);
    }

    /// Seed a document with raw contents, bypassing failure injection.
    pub fn insert_raw(&self, name: impl Into<String>, contents: impl Into<String>) {
        self.documents.write().insert(name.into(), contents.into());
    }

    /// Raw contents of a document.
    pub fn raw(&self, name: &str) -> Option<String> {
        self.documents.read().get(name).cloned()
    }
}

impl DocumentStore for MemoryStore {
    fn read(&self, name: &str) -> Result<Option<String>, StorageError> {
        Ok(self.raw(name))
    }

    fn write(&self, name: &str, contents: &str) -> Result<(), StorageError> {
        if self.failing.read().contains(name) {
            return Err(StorageError::Write {
                document: name.to_string(),
                source: io::Error::other("injected write failure"),
            });
        }
        self.documents
            .write()
            .insert(name.to_string(), contents.to_string());
        Ok(())
    }

    fn names(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.documents.read().keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn injected_failure_leaves_previous_contents() {
        let store = MemoryStore::new();
        store.write("stats", "old").unwrap();
        store.fail_writes_to("stats");

        let err = store.write("stats", "new").unwrap_err();
        assert!(matches!(err, StorageError::Write { .. }));
        assert_eq!(store.raw("stats").as_deref(), Some("old"));

        store.heal("stats");
        store.write("stats", "new").unwrap();
        assert_eq!(store.raw("stats").as_deref(), Some("new"));
    }
}
