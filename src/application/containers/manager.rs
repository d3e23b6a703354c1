use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

use crate::application::containers::ContainerRegistry;
use crate::application::ports::{BlobStore, StorageError};
use crate::domain::value_objects::ContainerName;

#[derive(Debug, Error)]
pub enum ContainerError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Guarantees a container exists before objects are touched.
///
/// The backend is asked about a given name at most once over the process
/// lifetime, as long as that request succeeds. Failed attempts leave the
/// registry untouched and the next caller tries again.
pub struct ContainerManager {
    blob_store: Arc<dyn BlobStore>,
    registry: Arc<ContainerRegistry>,
}

impl ContainerManager {
    pub fn new(blob_store: Arc<dyn BlobStore>, registry: Arc<ContainerRegistry>) -> Self {
        Self {
            blob_store,
            registry,
        }
    }

    pub fn registry(&self) -> &Arc<ContainerRegistry> {
        &self.registry
    }

    /// Make sure `name` exists in the backend and in the registry
    pub async fn ensure(&self, name: ContainerName) -> Result<ContainerName, ContainerError> {
        if self.registry.contains(&name) {
            debug!(container = %name, "container_already_known");
            return Ok(name);
        }

        // Concurrent first requests for the same name queue on this slot.
        let slot = self.registry.slot(&name);
        let result = slot
            .get_or_try_init(|| self.provision(&name))
            .await
            .map(|_| ());
        drop(slot);

        if let Err(e) = result {
            self.registry.release(&name);
            return Err(e);
        }

        Ok(name)
    }

    async fn provision(&self, name: &ContainerName) -> Result<(), ContainerError> {
        let exists = self.blob_store.container_exists(name).await?;

        if exists {
            debug!(container = %name, "container_exists");
        } else {
            self.blob_store.create_container(name).await?;
            info!(container = %name, "container_created");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockBlobStore;

    fn name(value: &str) -> ContainerName {
        ContainerName::new(value).unwrap()
    }

    fn manager(store: MockBlobStore) -> ContainerManager {
        ContainerManager::new(Arc::new(store), Arc::new(ContainerRegistry::new()))
    }

    #[tokio::test]
    async fn test_ensure_creates_missing_container() {
        // Arrange
        let mut mock_store = MockBlobStore::new();
        mock_store
            .expect_container_exists()
            .withf(|c| c.as_str() == "photos")
            .times(1)
            .returning(|_| Ok(false));
        mock_store
            .expect_create_container()
            .withf(|c| c.as_str() == "photos")
            .times(1)
            .returning(|_| Ok(()));
        let manager = manager(mock_store);

        // Act
        let result = manager.ensure(name("photos")).await;

        // Assert
        assert_eq!(result.unwrap(), name("photos"));
        assert!(manager.registry().contains(&name("photos")));
    }

    #[tokio::test]
    async fn test_ensure_skips_create_for_existing_container() {
        // Arrange
        let mut mock_store = MockBlobStore::new();
        mock_store
            .expect_container_exists()
            .times(1)
            .returning(|_| Ok(true));
        mock_store.expect_create_container().never();
        let manager = manager(mock_store);

        // Act
        let result = manager.ensure(name("default")).await;

        // Assert
        assert!(result.is_ok());
        assert!(manager.registry().contains(&name("default")));
    }

    #[tokio::test]
    async fn test_ensure_fast_path_makes_no_backend_calls() {
        // Arrange
        let mut mock_store = MockBlobStore::new();
        mock_store
            .expect_container_exists()
            .times(1)
            .returning(|_| Ok(false));
        mock_store
            .expect_create_container()
            .times(1)
            .returning(|_| Ok(()));
        let manager = manager(mock_store);

        // Act
        for _ in 0..5 {
            manager.ensure(name("default")).await.unwrap();
        }

        // Assert (mock verifies call counts on drop)
        assert_eq!(manager.registry().len(), 1);
    }

    #[tokio::test]
    async fn test_ensure_exists_failure_is_not_recorded() {
        // Arrange
        let mut mock_store = MockBlobStore::new();
        mock_store
            .expect_container_exists()
            .times(1)
            .returning(|_| Err(StorageError::Internal("backend down".to_string())));
        mock_store.expect_create_container().never();
        let manager = manager(mock_store);

        // Act
        let result = manager.ensure(name("default")).await;

        // Assert
        assert!(matches!(result, Err(ContainerError::Storage(_))));
        assert!(!manager.registry().contains(&name("default")));
        assert_eq!(manager.registry().slot_count(), 0);
    }

    #[tokio::test]
    async fn test_ensure_create_failure_is_retried_next_time() {
        // Arrange
        let mut mock_store = MockBlobStore::new();
        mock_store
            .expect_container_exists()
            .times(2)
            .returning(|_| Ok(false));
        let mut attempts = 0;
        mock_store
            .expect_create_container()
            .times(2)
            .returning(move |_| {
                attempts += 1;
                if attempts == 1 {
                    Err(StorageError::Internal("transient".to_string()))
                } else {
                    Ok(())
                }
            });
        let manager = manager(mock_store);

        // Act
        let first = manager.ensure(name("default")).await;
        let second = manager.ensure(name("default")).await;

        // Assert
        assert!(first.is_err());
        assert!(second.is_ok());
        assert!(manager.registry().contains(&name("default")));
    }

    #[tokio::test]
    async fn test_failing_names_do_not_accumulate() {
        // Arrange
        let mut mock_store = MockBlobStore::new();
        mock_store
            .expect_container_exists()
            .times(50)
            .returning(|_| Err(StorageError::Internal("backend down".to_string())));
        let manager = manager(mock_store);

        // Act
        for i in 0..50 {
            let result = manager.ensure(name(&format!("client-{}", i))).await;
            assert!(result.is_err());
        }

        // Assert
        assert_eq!(manager.registry().slot_count(), 0);
        assert!(manager.registry().is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_ensure_provisions_once() {
        // Arrange
        let mut mock_store = MockBlobStore::new();
        mock_store
            .expect_container_exists()
            .times(1)
            .returning(|_| {
                std::thread::sleep(std::time::Duration::from_millis(20));
                Ok(false)
            });
        mock_store
            .expect_create_container()
            .times(1)
            .returning(|_| Ok(()));
        let manager = Arc::new(manager(mock_store));

        // Act
        let handles: Vec<_> = (0..16)
            .map(|_| {
                let manager = Arc::clone(&manager);
                tokio::spawn(async move { manager.ensure(name("shared")).await })
            })
            .collect();

        // Assert
        for handle in handles {
            assert!(handle.await.unwrap().is_ok());
        }
        assert_eq!(manager.registry().names(), vec![name("shared")]);
    }
}
