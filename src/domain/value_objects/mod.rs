mod byte_range;
mod container_name;
mod content_type;
mod object_key;

pub use byte_range::ByteRange;
pub use container_name::ContainerName;
pub use content_type::ContentType;
pub use object_key::ObjectKey;
