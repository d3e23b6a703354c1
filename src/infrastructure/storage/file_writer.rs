use std::path::Path;
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;

use crate::application::ports::StorageError;

/// Helpers for crash-safe file replacement
pub struct FileWriter;

impl FileWriter {
    /// Write `bytes` to `temp_path`, then atomically rename it over
    /// `final_path`. The temp file is removed if any step fails.
    pub async fn replace(
        temp_path: &Path,
        final_path: &Path,
        bytes: &[u8],
        durable: bool,
    ) -> Result<u64, StorageError> {
        if let Err(e) = Self::write_file(temp_path, bytes, durable).await {
            let _ = fs::remove_file(temp_path).await;
            return Err(e);
        }

        if let Err(e) = fs::rename(temp_path, final_path).await {
            let _ = fs::remove_file(temp_path).await;
            return Err(StorageError::Io(e));
        }

        // Persist the rename itself
        if durable {
            if let Some(parent) = final_path.parent() {
                match File::open(parent).await {
                    Ok(dir) => {
                        if let Err(e) = dir.sync_all().await {
                            tracing::warn!("Failed to sync parent directory after rename: {}", e);
                        }
                    }
                    Err(e) => {
                        tracing::warn!("Failed to open parent directory for sync: {}", e);
                    }
                }
            }
        }

        Ok(bytes.len() as u64)
    }

    /// Write a whole file, fsyncing when `durable` is set
    pub async fn write_file(path: &Path, bytes: &[u8], durable: bool) -> Result<(), StorageError> {
        let mut file = File::create(path).await?;
        file.write_all(bytes).await?;
        file.flush().await?;

        // fsync is expensive but required for durability guarantees
        if durable {
            file.sync_all().await?;
        }

        Ok(())
    }

    /// Remove a file, treating a missing file as already removed
    pub async fn remove_if_exists(path: &Path) -> Result<bool, StorageError> {
        match fs::remove_file(path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StorageError::Io(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_replace_moves_temp_into_place() {
        let dir = TempDir::new().unwrap();
        let temp = dir.path().join("tmp");
        let target = dir.path().join("target");

        let written = FileWriter::replace(&temp, &target, b"payload", true)
            .await
            .unwrap();

        assert_eq!(written, 7);
        assert!(!temp.exists());
        assert_eq!(std::fs::read(&target).unwrap(), b"payload");
    }

    #[tokio::test]
    async fn test_replace_overwrites_existing() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("target");
        std::fs::write(&target, b"old").unwrap();

        FileWriter::replace(&dir.path().join("tmp"), &target, b"new", false)
            .await
            .unwrap();

        assert_eq!(std::fs::read(&target).unwrap(), b"new");
    }

    #[tokio::test]
    async fn test_replace_cleans_up_when_target_dir_missing() {
        let dir = TempDir::new().unwrap();
        let temp = dir.path().join("tmp");
        let target = dir.path().join("missing").join("target");

        let result = FileWriter::replace(&temp, &target, b"data", false).await;

        assert!(matches!(result, Err(StorageError::Io(_))));
        assert!(!temp.exists());
    }

    #[tokio::test]
    async fn test_remove_if_exists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("file");
        std::fs::write(&path, b"x").unwrap();

        assert!(FileWriter::remove_if_exists(&path).await.unwrap());
        assert!(!FileWriter::remove_if_exists(&path).await.unwrap());
    }
}
