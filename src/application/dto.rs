use bytes::Bytes;

use crate::application::ports::FetchedObject;
use crate::domain::value_objects::{ContainerName, ContentType, ObjectKey};

/// Object returned by a read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub bytes: Bytes,
    pub content_type: ContentType,
}

impl From<FetchedObject> for StoredObject {
    fn from(fetched: FetchedObject) -> Self {
        Self {
            bytes: fetched.bytes,
            content_type: fetched.content_type,
        }
    }
}

/// Object handed to a write
#[derive(Debug, Clone)]
pub struct WriteRequest {
    pub container: ContainerName,
    pub key: ObjectKey,
    pub bytes: Bytes,
    pub content_type: ContentType,
}
