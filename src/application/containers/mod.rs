//! Lazy, memoized provisioning of backend containers

mod manager;
mod registry;

pub use manager::{ContainerError, ContainerManager};
pub use registry::ContainerRegistry;
