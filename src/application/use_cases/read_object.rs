use std::sync::Arc;
use thiserror::Error;

use crate::application::dto::StoredObject;
use crate::application::ports::{BlobStore, StorageError};
use crate::domain::value_objects::{ByteRange, ContainerName, ObjectKey};

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("Object not found: {0}")]
    NotFound(String),

    #[error("Blobstore sent empty data chunk when full file was requested: {0}")]
    EmptyObject(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Use case: Read a whole object
pub struct ReadObjectUseCase {
    blob_store: Arc<dyn BlobStore>,
}

impl ReadObjectUseCase {
    pub fn new(blob_store: Arc<dyn BlobStore>) -> Self {
        Self { blob_store }
    }

    pub async fn execute(
        &self,
        container: &ContainerName,
        key: &ObjectKey,
    ) -> Result<StoredObject, ReadError> {
        let location = format!("{}/{}", container, key);

        // 1. Existence check
        if !self.blob_store.object_exists(container, key).await? {
            return Err(ReadError::NotFound(location));
        }

        // 2. Fetch the whole object
        let fetched = match self
            .blob_store
            .get_object(container, key, ByteRange::full())
            .await
        {
            Ok(fetched) => fetched,
            // Removed between the existence check and the fetch
            Err(StorageError::ObjectNotFound(_)) => return Err(ReadError::NotFound(location)),
            Err(e) => return Err(ReadError::Storage(e)),
        };

        tracing::debug!(
            container = %container,
            key = %key,
            size_bytes = fetched.bytes.len(),
            "object_fetched"
        );

        // 3. Existing object with no payload means the backend is inconsistent
        if fetched.bytes.is_empty() {
            return Err(ReadError::EmptyObject(location));
        }

        Ok(fetched.into())
    }
}
