//! # blob_gateway - HTTP gateway over a blob-storage backend
//!
//! Every top-level path segment names an object inside a container:
//! `GET /{key}` reads it, `POST /{key}` creates or overwrites it and
//! `DELETE /{key}` removes it.
//!
//! ## Architecture Layers
//!
//! - **Domain**: Value objects (container names, object keys, content types)
//! - **Application**: Container provisioning, object use cases and the
//!   backend port
//! - **Infrastructure**: Backend adapters (in-memory, local filesystem)
//! - **API**: Router, request handling and middleware
//!
//! ## Container selection
//!
//! The target container comes from the `blobby-container` header, else the
//! `container` query parameter, else the configured default (`default`).
//! Containers are created in the backend on first use and remembered for
//! the lifetime of the process.
//!
//! ## Example Usage
//!
//! ```no_run
//! use blob_gateway::{api::create_router, ApplicationBuilder, Config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let state = ApplicationBuilder::new(Config::default())
//!     .with_storage()
//!     .await?
//!     .build()?;
//! let app = create_router(state);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export key types explicitly to avoid ambiguity
pub use api::errors as api_errors;
pub use application::builder::ApplicationBuilder;
pub use application::{containers, dto, ports, use_cases};
pub use config::Config;
pub use domain::errors as domain_errors;
pub use domain::value_objects;
