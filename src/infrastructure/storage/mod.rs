mod file_writer;
mod in_memory_store;
mod local_filesystem_store;
mod object_record;
mod path_builder;

pub use file_writer::FileWriter;
pub use in_memory_store::InMemoryBlobStore;
pub use local_filesystem_store::LocalFilesystemStore;
pub use object_record::ObjectRecord;
pub use path_builder::PathBuilder;
