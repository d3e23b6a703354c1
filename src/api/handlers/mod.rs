pub mod delete;
pub mod download;
pub mod object;
pub mod upload;

pub use delete::delete_object;
pub use download::read_object;
pub use object::{object_handler, SUPPORTED_METHODS};
pub use upload::write_object;
