use async_trait::async_trait;
use bytes::Bytes;
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

use crate::application::ports::{BlobStore, Chunk, FetchedObject, StorageError};
use crate::domain::value_objects::{ByteRange, ContainerName, ContentType, ObjectKey};
use crate::infrastructure::storage::{FileWriter, ObjectRecord, PathBuilder};

/// Local filesystem blob store.
///
/// Containers are directories under `{root}/containers`. Each object is one
/// [`ObjectRecord`] file written to `{root}/temp` first and renamed into
/// place, so readers see either the old object or the new one, never a mix.
pub struct LocalFilesystemStore {
    path_builder: PathBuilder,
    durable_writes: bool,
}

impl LocalFilesystemStore {
    pub fn new(root: PathBuf) -> Self {
        Self::with_durability(root, true)
    }

    pub fn with_durability(root: PathBuf, durable_writes: bool) -> Self {
        Self {
            path_builder: PathBuilder::new(root),
            durable_writes,
        }
    }

    /// Initialize storage directories
    pub async fn init(&self) -> Result<(), StorageError> {
        fs::create_dir_all(self.path_builder.containers_root()).await?;
        fs::create_dir_all(self.path_builder.root().join("temp")).await?;
        Ok(())
    }

    async fn require_container(&self, container: &ContainerName) -> Result<(), StorageError> {
        if self.container_exists(container).await? {
            Ok(())
        } else {
            Err(StorageError::ContainerNotFound(container.to_string()))
        }
    }
}

#[async_trait]
impl BlobStore for LocalFilesystemStore {
    async fn container_exists(&self, container: &ContainerName) -> Result<bool, StorageError> {
        let path = self.path_builder.container_path(container);
        match fs::metadata(&path).await {
            Ok(meta) => Ok(meta.is_dir()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    async fn create_container(&self, container: &ContainerName) -> Result<(), StorageError> {
        let path = self.path_builder.container_path(container);
        debug!("Creating container directory: {:?}", path);
        fs::create_dir_all(&path).await?;
        Ok(())
    }

    async fn object_exists(
        &self,
        container: &ContainerName,
        key: &ObjectKey,
    ) -> Result<bool, StorageError> {
        let path = self.path_builder.object_path(container, key);
        match fs::metadata(&path).await {
            Ok(meta) => Ok(meta.is_file()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    async fn get_object(
        &self,
        container: &ContainerName,
        key: &ObjectKey,
        range: ByteRange,
    ) -> Result<FetchedObject, StorageError> {
        let path = self.path_builder.object_path(container, key);

        let raw = fs::read(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::ObjectNotFound(format!("{}/{}", container, key))
            } else {
                StorageError::Io(e)
            }
        })?;

        let object = ObjectRecord::decode(Bytes::from(raw))?;
        Ok(FetchedObject {
            bytes: object.bytes.slice(range.clamp_to(object.bytes.len())),
            content_type: object.content_type,
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
        self.require_container(container).await?;

        let object_path = self.path_builder.object_path(container, key);
        if let Some(parent) = object_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let record = ObjectRecord::encode(key, content_type, &chunk.bytes)?;
        FileWriter::replace(
            &self.path_builder.temp_path(Uuid::new_v4()),
            &object_path,
            &record,
            self.durable_writes,
        )
        .await?;

        debug!(
            "Object written: {}/{} ({} bytes) at {:?}",
            container,
            key,
            chunk.bytes.len(),
            object_path
        );
        Ok(())
    }

    async fn remove_objects(
        &self,
        container: &ContainerName,
        keys: &[ObjectKey],
    ) -> Result<(), StorageError> {
        for key in keys {
            FileWriter::remove_if_exists(&self.path_builder.object_path(container, key)).await?;
        }
        Ok(())
    }
}
