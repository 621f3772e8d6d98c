//! ArtifactStore port for reading inputs and writing study outputs.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during artifact storage operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Failed to serialize {path}: {reason}")]
    SerializationFailed { path: String, reason: String },

    #[error("Failed to parse {path}: {reason}")]
    DeserializationFailed { path: String, reason: String },
}

impl StorageError {
    pub fn serialization(path: &Path, reason: impl ToString) -> Self {
        StorageError::SerializationFailed {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn deserialization(path: &Path, reason: impl ToString) -> Self {
        StorageError::DeserializationFailed {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Plain-text file operations used by the application handlers.
pub trait ArtifactStore: Send + Sync {
    /// Read a whole file as UTF-8 text
    fn read_to_string(&self, path: &Path) -> Result<String, StorageError>;

    /// Write (or replace) a file, creating parent directories as needed
    ///
    /// Returns the path that was written
    fn write(&self, path: &Path, content: &str) -> Result<PathBuf, StorageError>;

    /// Check whether a file or directory exists
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all of its parents
    fn create_dir_all(&self, path: &Path) -> Result<(), StorageError>;
}

/// Structured document formats, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// `.yaml` and `.yml` are YAML; everything else is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                DocumentFormat::Yaml
            }
            _ => DocumentFormat::Json,
        }
    }
}

/// Typed document helpers available on every [`ArtifactStore`].
pub trait DocumentStore {
    /// Read and deserialize a JSON or YAML document
    fn load_document<T: DeserializeOwned>(&self, path: &Path) -> Result<T, StorageError>;

    /// Serialize a value as pretty JSON and write it
    fn save_json<T: Serialize>(&self, path: &Path, value: &T) -> Result<PathBuf, StorageError>;
}

impl<S: ArtifactStore + ?Sized> DocumentStore for S {
    fn load_document<T: DeserializeOwned>(&self, path: &Path) -> Result<T, StorageError> {
        let content = self.read_to_string(path)?;
        match DocumentFormat::from_path(path) {
            DocumentFormat::Json => serde_json::from_str(&content)
                .map_err(|e| StorageError::deserialization(path, e)),
            DocumentFormat::Yaml => serde_yaml::from_str(&content)
                .map_err(|e| StorageError::deserialization(path, e)),
        }
    }

    fn save_json<T: Serialize>(&self, path: &Path, value: &T) -> Result<PathBuf, StorageError> {
        let json =
            serde_json::to_string_pretty(value).map_err(|e| StorageError::serialization(path, e))?;
        self.write(path, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension() {
        assert_eq!(DocumentFormat::from_path(Path::new("spec.yaml")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("spec.YML")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("spec.json")), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_path(Path::new("spec")), DocumentFormat::Json);
    }

    #[test]
    fn storage_error_messages_include_path() {
        let err = StorageError::deserialization(Path::new("design.json"), "expected map");
        assert_eq!(err.to_string(), "Failed to parse design.json: expected map");
    }
}
