//! Storage adapters - Implementations of the ArtifactStore port.
//!
//! - `FileArtifactStore` - Local filesystem with atomic writes
//! - `InMemoryArtifactStore` - Map-backed store for tests

mod file_artifact_store;
mod in_memory_artifact_store;

pub use file_artifact_store::FileArtifactStore;
pub use in_memory_artifact_store::InMemoryArtifactStore;
