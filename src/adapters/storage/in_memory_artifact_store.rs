//! In-Memory Artifact Store
//!
//! Keeps files in a map keyed by path. Useful for testing handlers without
//! touching the disk.

use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::ports::{ArtifactStore, StorageError};

/// In-memory storage for artifacts
#[derive(Debug, Clone, Default)]
pub struct InMemoryArtifactStore {
    files: Arc<RwLock<HashMap<PathBuf, String>>>,
    dirs: Arc<RwLock<BTreeSet<PathBuf>>>,
}

impl InMemoryArtifactStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one file
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        if let Ok(mut files) = self.files.write() {
            files.insert(path.into(), content.into());
        }
        self
    }

    /// Get the number of stored files
    pub fn file_count(&self) -> usize {
        self.files.read().map(|f| f.len()).unwrap_or(0)
    }

    /// All stored file paths, sorted
    pub fn paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = self
            .files
            .read()
            .map(|f| f.keys().cloned().collect())
            .unwrap_or_default();
        paths.sort();
        paths
    }

    fn poisoned() -> StorageError {
        StorageError::IoError("in-memory store lock poisoned".to_string())
    }
}

impl ArtifactStore for InMemoryArtifactStore {
    fn read_to_string(&self, path: &Path) -> Result<String, StorageError> {
        let files = self.files.read().map_err(|_| Self::poisoned())?;
        files
            .get(path)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(path.display().to_string()))
    }

    fn write(&self, path: &Path, content: &str) -> Result<PathBuf, StorageError> {
        let mut files = self.files.write().map_err(|_| Self::poisoned())?;
        files.insert(path.to_path_buf(), content.to_string());
        Ok(path.to_path_buf())
    }

    fn exists(&self, path: &Path) -> bool {
        let in_files = self
            .files
            .read()
            .map(|f| f.contains_key(path))
            .unwrap_or(false);
        in_files || self.dirs.read().map(|d| d.contains(path)).unwrap_or(false)
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), StorageError> {
        let mut dirs = self.dirs.write().map_err(|_| Self::poisoned())?;
        dirs.insert(path.to_path_buf());
        Ok(())
    }
}
