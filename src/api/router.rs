use axum::{extract::DefaultBodyLimit, middleware as axum_middleware, Router};
use std::sync::Arc;
use tower_http::limit::RequestBodyLimitLayer;

use crate::api::handlers::object_handler;
use crate::api::middleware::metrics;
use crate::application::containers::ContainerManager;
use crate::application::use_cases::{DeleteObjectUseCase, ReadObjectUseCase, WriteObjectUseCase};
use crate::domain::value_objects::ContainerName;

/// Application state container
#[derive(Clone)]
pub struct AppState {
    pub containers: Arc<ContainerManager>,
    pub read_use_case: Arc<ReadObjectUseCase>,
    pub write_use_case: Arc<WriteObjectUseCase>,
    pub delete_use_case: Arc<DeleteObjectUseCase>,
    /// Container used when a request does not select one
    pub default_container: ContainerName,
    pub max_body_bytes: usize,
}

/// Create router with the object gateway and middleware.
///
/// There are no fixed routes: every path is an object key, so the gateway
/// is installed as the fallback and validates the path itself.
pub fn create_router(state: AppState) -> Router {
    let max_body_bytes = state.max_body_bytes;

    Router::new()
        .fallback(object_handler)
        .with_state(state)
        // One limit, configured in one place
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(axum_middleware::from_fn(metrics::metrics_middleware))
}
