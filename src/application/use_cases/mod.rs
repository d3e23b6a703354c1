mod delete_object;
mod read_object;
mod write_object;

pub use delete_object::{DeleteError, DeleteObjectUseCase};
pub use read_object::{ReadError, ReadObjectUseCase};
pub use write_object::{WriteError, WriteObjectUseCase};
