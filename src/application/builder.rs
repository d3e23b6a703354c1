use std::sync::Arc;

use tracing::info;

use crate::api::router::AppState;
use crate::application::{
    containers::{ContainerManager, ContainerRegistry},
    ports::BlobStore,
    use_cases::{DeleteObjectUseCase, ReadObjectUseCase, WriteObjectUseCase},
};
use crate::config::{Config, StorageBackend};
use crate::infrastructure::storage::{InMemoryBlobStore, LocalFilesystemStore};

/// Application builder for clean dependency injection and setup
pub struct ApplicationBuilder {
    config: Config,
    blob_store: Option<Arc<dyn BlobStore>>,
}

impl ApplicationBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            blob_store: None,
        }
    }

    /// Initialize the backend selected by the configuration
    pub async fn with_storage(mut self) -> Result<Self, Box<dyn std::error::Error>> {
        let blob_store: Arc<dyn BlobStore> = match self.config.storage_backend {
            StorageBackend::Memory => Arc::new(InMemoryBlobStore::new()),
            StorageBackend::Filesystem => {
                let store = LocalFilesystemStore::with_durability(
                    self.config.storage_root.clone(),
                    self.config.durable_writes,
                );
                store.init().await?;
                Arc::new(store)
            }
        };

        info!(
            backend = %self.config.storage_backend,
            "Storage backend initialized"
        );
        self.blob_store = Some(blob_store);
        Ok(self)
    }

    /// Use an already constructed backend
    pub fn with_blob_store(mut self, blob_store: Arc<dyn BlobStore>) -> Self {
        self.blob_store = Some(blob_store);
        self
    }

    /// Build application state with all use cases
    pub fn build(self) -> Result<AppState, Box<dyn std::error::Error>> {
        let blob_store = self.blob_store.ok_or("Blob store not initialized")?;
        let default_container = self.config.default_container_name()?;

        let containers = Arc::new(ContainerManager::new(
            Arc::clone(&blob_store),
            Arc::new(ContainerRegistry::new()),
        ));
        let read_use_case = Arc::new(ReadObjectUseCase::new(Arc::clone(&blob_store)));
        let write_use_case = Arc::new(WriteObjectUseCase::new(Arc::clone(&blob_store)));
        let delete_use_case = Arc::new(DeleteObjectUseCase::new(Arc::clone(&blob_store)));

        info!("Application layer initialized");

        Ok(AppState {
            containers,
            read_use_case,
            write_use_case,
            delete_use_case,
            default_container,
            max_body_bytes: self.config.max_body_bytes,
        })
    }

    /// Get configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_build_without_storage_fails() {
        let result = ApplicationBuilder::new(Config::default()).build();
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_build_with_memory_backend() {
        let state = ApplicationBuilder::new(Config::default())
            .with_storage()
            .await
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(state.default_container.as_str(), "default");
        assert!(state.containers.registry().is_empty());
    }

    #[tokio::test]
    async fn test_build_with_filesystem_backend_initialises_root() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            storage_backend: StorageBackend::Filesystem,
            storage_root: dir.path().join("blobs"),
            durable_writes: false,
            default_container: "uploads".to_string(),
            ..Config::default()
        };

        let state = ApplicationBuilder::new(config)
            .with_storage()
            .await
            .unwrap()
            .build()
            .unwrap();

        assert!(dir.path().join("blobs").join("containers").exists());
        assert_eq!(state.default_container.as_str(), "uploads");
    }
}
