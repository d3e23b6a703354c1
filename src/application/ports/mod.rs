mod blob_store;

pub use blob_store::{BlobStore, Chunk, FetchedObject, StorageError};

#[cfg(test)]
pub use blob_store::MockBlobStore;
