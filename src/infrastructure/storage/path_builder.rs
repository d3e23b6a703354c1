use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

use crate::domain::value_objects::{ContainerName, ObjectKey};

/// Utility for generating storage paths
///
/// Object keys are arbitrary segments, so files are named after the SHA-256
/// of the key and fanned out by its first two hex characters:
/// `/root/containers/{container}/{prefix}/{digest}`.
pub struct PathBuilder {
    root: PathBuf,
}

impl PathBuilder {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding every container: /root/containers
    pub fn containers_root(&self) -> PathBuf {
        self.root.join("containers")
    }

    /// Container directory: /root/containers/{container}
    pub fn container_path(&self, container: &ContainerName) -> PathBuf {
        self.containers_root().join(container.as_str())
    }

    /// Temp upload path: /root/temp/{uuid}
    pub fn temp_path(&self, id: uuid::Uuid) -> PathBuf {
        self.root.join("temp").join(id.to_string())
    }

    /// Object record path: /root/containers/{container}/{prefix}/{digest}
    pub fn object_path(&self, container: &ContainerName, key: &ObjectKey) -> PathBuf {
        let digest = Self::key_digest(key);
        self.container_path(container)
            .join(&digest[0..2])
            .join(digest)
    }

    /// Hex SHA-256 of the key (64 chars)
    pub fn key_digest(key: &ObjectKey) -> String {
        hex::encode(Sha256::digest(key.as_str().as_bytes()))
    }
}
