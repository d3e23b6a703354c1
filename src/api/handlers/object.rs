use axum::{
    extract::{FromRequest, Request, State},
    http::Method,
    response::Response,
};
use bytes::Bytes;
use tracing::info;

use crate::api::container_selector::resolve_container_name;
use crate::api::errors::ApiError;
use crate::api::handlers::{delete_object, read_object, upload, write_object};
use crate::api::router::AppState;
use crate::domain::value_objects::{ContentType, ObjectKey};

/// Methods the gateway answers. POST is the create/overwrite verb.
pub const SUPPORTED_METHODS: &[Method] = &[Method::GET, Method::POST, Method::DELETE];

/// Verb a request was sent with, once it is known to be supported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verb {
    Read,
    Write,
    Delete,
}

impl Verb {
    /// The single place unsupported methods are turned away
    fn from_method(method: &Method) -> Result<Self, ApiError> {
        match *method {
            Method::GET => Ok(Verb::Read),
            Method::POST => Ok(Verb::Write),
            Method::DELETE => Ok(Verb::Delete),
            _ => Err(ApiError::method_not_allowed(method, SUPPORTED_METHODS)),
        }
    }
}

/// What a request asks the gateway to do, with its inputs
enum Operation {
    Read,
    Write {
        content_type: ContentType,
        body: Bytes,
    },
    Delete,
}

impl Operation {
    async fn from_request(
        verb: Verb,
        request: Request,
        state: &AppState,
    ) -> Result<Self, ApiError> {
        match verb {
            Verb::Read => Ok(Operation::Read),
            Verb::Delete => Ok(Operation::Delete),
            Verb::Write => {
                let content_type = upload::content_type_from_headers(request.headers())?;
                let body = Bytes::from_request(request, state)
                    .await
                    .map_err(|rejection| {
                        ApiError::new(rejection.status(), rejection.body_text())
                    })?;
                Ok(Operation::Write { content_type, body })
            }
        }
    }
}

/// Every path lands here: `/{key}` names an object in the selected container
pub async fn object_handler(
    State(state): State<AppState>,
    request: Request,
) -> Result<Response, ApiError> {
    // 1. The path must be a single segment
    let key = ObjectKey::from_path(request.uri().path())?;

    // 2. Unsupported verbs never reach the backend
    let verb = Verb::from_method(request.method())?;

    // 3. Pick the container before the request body is consumed
    let container =
        resolve_container_name(request.headers(), request.uri(), &state.default_container)?;

    // 4. Method inputs
    let operation = Operation::from_request(verb, request, &state).await?;

    // 5. Container readiness; failures surface as backend errors
    let container = state.containers.ensure(container).await?;

    info!(key = %key, "clean id: {}", key);
    info!(container = %container, "container name: {}", container);

    // 6. Dispatch
    match operation {
        Operation::Read => read_object(&state.read_use_case, &container, &key).await,
        Operation::Write { content_type, body } => {
            write_object(&state.write_use_case, container, key, body, content_type).await
        }
        Operation::Delete => delete_object(&state.delete_use_case, &container, &key).await,
    }
}
