use std::sync::Arc;
use thiserror::Error;

use crate::application::dto::WriteRequest;
use crate::application::ports::{BlobStore, Chunk, StorageError};

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Use case: Create or overwrite an object
pub struct WriteObjectUseCase {
    blob_store: Arc<dyn BlobStore>,
}

impl WriteObjectUseCase {
    pub fn new(blob_store: Arc<dyn BlobStore>) -> Self {
        Self { blob_store }
    }

    /// Store the whole payload as one final chunk. Existing objects are
    /// replaced unconditionally.
    pub async fn execute(&self, request: WriteRequest) -> Result<(), WriteError> {
        let size_bytes = request.bytes.len();

        self.blob_store
            .put_object(
                &request.container,
                &request.key,
                Chunk::whole(request.bytes),
                &request.content_type,
            )
            .await?;

        tracing::debug!(
            container = %request.container,
            key = %request.key,
            content_type = %request.content_type,
            size_bytes,
            "object_written"
        );

        Ok(())
    }
}
