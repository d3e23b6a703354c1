use async_trait::async_trait;
use bytes::Bytes;
#[cfg(test)]
use mockall::{automock, predicate::*};
use thiserror::Error;

use crate::domain::value_objects::{ByteRange, ContainerName, ContentType, ObjectKey};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Container not found: {0}")]
    ContainerNotFound(String),

    #[error("Object not found: {0}")]
    ObjectNotFound(String),

    #[error("Unsupported chunk: offset {offset}, last {is_last}")]
    UnsupportedChunk { offset: u64, is_last: bool },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// A piece of an object's payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub bytes: Bytes,
    pub offset: u64,
    pub is_last: bool,
}

impl Chunk {
    /// The entire payload as a single, final chunk at offset 0
    pub fn whole(bytes: Bytes) -> Self {
        Self {
            bytes,
            offset: 0,
            is_last: true,
        }
    }
}

/// Object payload as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedObject {
    pub bytes: Bytes,
    pub content_type: ContentType,
}

/// Port for the blob-storage backend
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Check if a container exists
    async fn container_exists(&self, container: &ContainerName) -> Result<bool, StorageError>;

    /// Create a container
    async fn create_container(&self, container: &ContainerName) -> Result<(), StorageError>;

    /// Check if an object exists in a container
    async fn object_exists(
        &self,
        container: &ContainerName,
        key: &ObjectKey,
    ) -> Result<bool, StorageError>;

    /// Fetch the bytes of `range` along with the stored content type
    async fn get_object(
        &self,
        container: &ContainerName,
        key: &ObjectKey,
        range: ByteRange,
    ) -> Result<FetchedObject, StorageError>;

    /// Store a chunk, replacing any existing object at `key`
    async fn put_object(
        &self,
        container: &ContainerName,
        key: &ObjectKey,
        chunk: Chunk,
        content_type: &ContentType,
    ) -> Result<(), StorageError>;

    /// Remove objects. Keys that do not exist are ignored.
    async fn remove_objects(
        &self,
        container: &ContainerName,
        keys: &[ObjectKey],
    ) -> Result<(), StorageError>;
}
