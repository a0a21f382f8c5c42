//! JSON files in a data directory.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::StorageError;
use crate::port::DocumentStore;

const EXTENSION: &str = "json";

/// Stores each document as `<dir>/<name>.json`.
///
/// Writes go to a temp file that is synced and renamed over the target, so a
/// crash never leaves a half-written document behind.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StorageError::CreateDir {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    /// Directory holding the documents.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of a document.
    #[must_use]
    pub fn path_of(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.{EXTENSION}"))
    }
}

impl DocumentStore for FileStore {
    fn read(&self, name: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_of(name)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read {
                document: name.to_string(),
                source,
            }),
        }
    }

    fn write(&self, name: &str, contents: &str) -> Result<(), StorageError> {
        let path = self.path_of(name);
        let temp_path = path.with_extension("json.tmp");
        let write_err = |source| StorageError::Write {
            document: name.to_string(),
            source,
        };

        let mut file = fs::File::create(&temp_path).map_err(write_err)?;

        let cleanup_and_err = |e| {
            let _ = fs::remove_file(&temp_path);
            write_err(e)
        };

        file.write_all(contents.as_bytes()).map_err(cleanup_and_err)?;
        file.sync_all().map_err(cleanup_and_err)?;
        fs::rename(&temp_path, &path).map_err(cleanup_and_err)?;

        debug!(document = name, bytes = contents.len(), "Document written");
        Ok(())
    }

    fn names(&self) -> Result<Vec<String>, StorageError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir).map_err(StorageError::List)? {
            let path = entry.map_err(StorageError::List)?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}
