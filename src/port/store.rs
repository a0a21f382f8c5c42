//! Document store port.
//!
//! Every collection is one named JSON document. The store only moves whole
//! documents; parsing and shape live in the application layer.

use crate::error::StorageError;

/// Whole-document persistence keyed by name (`orders`, `stats`, `orders-2025-03`).
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - `write` replaces the document wholesale; readers never see a partial write
/// - A missing document is `Ok(None)`, not an error
pub trait DocumentStore: Send + Sync {
    /// Read a document. Returns `None` when it does not exist.
    fn read(&self, name: &str) -> Result<Option<String>, StorageError>;

    /// Replace a document.
    fn write(&self, name: &str, contents: &str) -> Result<(), StorageError>;

    /// Names of all stored documents, sorted.
    fn names(&self) -> Result<Vec<String>, StorageError>;

    /// Whether a document exists.
    fn exists(&self, name: &str) -> Result<bool, StorageError> {
        Ok(self.read(name)?.is_some())
    }
}
