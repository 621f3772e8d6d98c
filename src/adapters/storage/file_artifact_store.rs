//! Filesystem Artifact Store - Implementation of ArtifactStore on local disk.
//!
//! Writes go through a temp file followed by a rename, so a crash never
//! leaves a half-written design or report behind.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::ports::{ArtifactStore, StorageError};

/// Local filesystem storage.
///
/// Relative paths are resolved against `root` when one is configured, and
/// against the process working directory otherwise.
///
/// # Usage
///
/// ```rust,ignore
/// let store = FileArtifactStore::new();
/// let written = store.write(Path::new("out/utilities.csv"), "attribute,level\n")?;
/// let text = store.read_to_string(&written)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct FileArtifactStore {
    root: Option<PathBuf>,
}

impl FileArtifactStore {
    /// Store that uses paths exactly as given.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Store that resolves relative paths under `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }

    fn temp_path(path: &Path) -> PathBuf {
        let mut name = path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        path.with_file_name(name)
    }

    fn write_and_replace(temp: &Path, target: &Path, content: &str) -> Result<(), StorageError> {
        let mut file =
            fs::File::create(temp).map_err(|e| Self::io_error("create temp file", temp, e))?;
        file.write_all(content.as_bytes())
            .map_err(|e| Self::io_error("write temp file", temp, e))?;
        file.sync_all()
            .map_err(|e| Self::io_error("sync temp file", temp, e))?;
        fs::rename(temp, target).map_err(|e| Self::io_error("rename temp file to", target, e))
    }

    fn io_error(action: &str, path: &Path, err: io::Error) -> StorageError {
        StorageError::IoError(format!("Failed to {} {}: {}", action, path.display(), err))
    }
}

impl ArtifactStore for FileArtifactStore {
    fn read_to_string(&self, path: &Path) -> Result<String, StorageError> {
        let full = self.resolve(path);
        fs::read_to_string(&full).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => StorageError::NotFound(full.display().to_string()),
            _ => Self::io_error("read", &full, e),
        })
    }

    fn write(&self, path: &Path, content: &str) -> Result<PathBuf, StorageError> {
        let full = self.resolve(path);
        if let Some(parent) = full.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| Self::io_error("create directory", parent, e))?;
        }

        let temp = Self::temp_path(&full);
        if let Err(err) = Self::write_and_replace(&temp, &full, content) {
            let _ = fs::remove_file(&temp);
            return Err(err);
        }

        Ok(full)
    }

    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).exists()
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), StorageError> {
        let full = self.resolve(path);
        fs::create_dir_all(&full).map_err(|e| Self::io_error("create directory", &full, e))
    }
}
