use std::sync::Arc;
use thiserror::Error;

use crate::application::ports::{BlobStore, StorageError};
use crate::domain::value_objects::{ContainerName, ObjectKey};

#[derive(Debug, Error)]
pub enum DeleteError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Use case: Delete an object
pub struct DeleteObjectUseCase {
    blob_store: Arc<dyn BlobStore>,
}

impl DeleteObjectUseCase {
    pub fn new(blob_store: Arc<dyn BlobStore>) -> Self {
        Self { blob_store }
    }

    /// Remove `key`. Deleting a key that does not exist succeeds.
    pub async fn execute(
        &self,
        container: &ContainerName,
        key: &ObjectKey,
    ) -> Result<(), DeleteError> {
        self.blob_store
            .remove_objects(container, std::slice::from_ref(key))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockBlobStore;

    #[tokio::test]
    async fn test_delete_removes_exactly_one_key() {
        // Arrange
        let mut mock_store = MockBlobStore::new();
        mock_store
            .expect_remove_objects()
            .withf(|c, keys| {
                c.as_str() == "default" && keys.len() == 1 && keys[0].as_str() == "a.txt"
            })
            .times(1)
            .returning(|_, _| Ok(()));
        mock_store.expect_object_exists().never();
        let use_case = DeleteObjectUseCase::new(Arc::new(mock_store));

        // Act
        let result = use_case
            .execute(&ContainerName::default(), &ObjectKey::new("a.txt").unwrap())
            .await;

        // Assert
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_delete_backend_failure_propagates() {
        // Arrange
        let mut mock_store = MockBlobStore::new();
        mock_store
            .expect_remove_objects()
            .returning(|_, _| Err(StorageError::Internal("disk full".to_string())));
        let use_case = DeleteObjectUseCase::new(Arc::new(mock_store));

        // Act
        let result = use_case
            .execute(&ContainerName::default(), &ObjectKey::new("a.txt").unwrap())
            .await;

        // Assert
        assert!(matches!(result, Err(DeleteError::Storage(_))));
    }
}
