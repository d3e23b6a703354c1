use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::RwLock;
use std::collections::HashMap;

use crate::application::ports::{BlobStore, Chunk, FetchedObject, StorageError};
use crate::domain::value_objects::{ByteRange, ContainerName, ContentType, ObjectKey};

#[derive(Clone)]
struct StoredEntry {
    bytes: Bytes,
    content_type: ContentType,
}

type Container = HashMap<ObjectKey, StoredEntry>;

/// Blob store kept entirely in process memory.
///
/// Used for development and tests; contents are lost on restart.
#[derive(Default)]
pub struct InMemoryBlobStore {
    containers: RwLock<HashMap<ContainerName, Container>>,
}

impl InMemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of objects across all containers
    pub fn object_count(&self) -> usize {
        self.containers.read().values().map(HashMap::len).sum()
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn container_exists(&self, container: &ContainerName) -> Result<bool, StorageError> {
        Ok(self.containers.read().contains_key(container))
    }

    async fn create_container(&self, container: &ContainerName) -> Result<(), StorageError> {
        self.containers
            .write()
            .entry(container.clone())
            .or_default();
        Ok(())
    }

    async fn object_exists(
        &self,
        container: &ContainerName,
        key: &ObjectKey,
    ) -> Result<bool, StorageError> {
        Ok(self
            .containers
            .read()
            .get(container)
            .is_some_and(|objects| objects.contains_key(key)))
    }

    async fn get_object(
        &self,
        container: &ContainerName,
        key: &ObjectKey,
        range: ByteRange,
    ) -> Result<FetchedObject, StorageError> {
        let containers = self.containers.read();
        let objects = containers
            .get(container)
            .ok_or_else(|| StorageError::ContainerNotFound(container.to_string()))?;
        let entry = objects
            .get(key)
            .ok_or_else(|| StorageError::ObjectNotFound(format!("{}/{}", container, key)))?;

        Ok(FetchedObject {
            bytes: entry.bytes.slice(range.clamp_to(entry.bytes.len())),
            content_type: entry.content_type.clone(),
        })
    }

    async fn put_object(
        &self,
        container: &ContainerName,
        key: &ObjectKey,
        chunk: Chunk,
        content_type: &ContentType,
    ) -> Result<(), StorageError> {
        if chunk.offset != 0 || !chunk.is_last {
            return Err(StorageError::UnsupportedChunk {
                offset: chunk.offset,
                is_last: chunk.is_last,
            });
        }

        let mut containers = self.containers.write();
        let objects = containers
            .get_mut(container)
            .ok_or_else(|| StorageError::ContainerNotFound(container.to_string()))?;
        objects.insert(
            key.clone(),
            StoredEntry {
                bytes: chunk.bytes,
                content_type: content_type.clone(),
            },
        );
        Ok(())
    }

    async fn remove_objects(
        &self,
        container: &ContainerName,
        keys: &[ObjectKey],
    ) -> Result<(), StorageError> {
        if let Some(objects) = self.containers.write().get_mut(container) {
            for key in keys {
                objects.remove(key);
            }
        }
        Ok(())
    }
}
