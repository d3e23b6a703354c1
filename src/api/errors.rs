use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::application::containers::ContainerError;
use crate::application::use_cases::{DeleteError, ReadError, WriteError};
use crate::domain::errors::DomainError;

/// API error response
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    allow: Option<String>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            allow: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// 405 carrying an `Allow` header with the supported methods
    pub fn method_not_allowed(method: &Method, allowed: &[Method]) -> Self {
        let allow = allowed
            .iter()
            .map(Method::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            status: StatusCode::METHOD_NOT_ALLOWED,
            message: format!("Method {} is not allowed", method),
            allow: Some(allow),
        }
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, message)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message,
        }));

        let mut response = (self.status, body).into_response();
        if let Some(allow) = self.allow.and_then(|a| HeaderValue::from_str(&a).ok()) {
            response.headers_mut().insert(header::ALLOW, allow);
        }
        response
    }
}

// Convert domain and use case errors to API errors

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::bad_request(err.to_string())
    }
}

impl From<ContainerError> for ApiError {
    fn from(err: ContainerError) -> Self {
        match err {
            ContainerError::Storage(e) => {
                tracing::error!(error = %e, "Failed to ensure container");
                ApiError::internal_error(format!("Storage error: {}", e))
            }
        }
    }
}

impl From<ReadError> for ApiError {
    fn from(err: ReadError) -> Self {
        match err {
            ReadError::NotFound(msg) => ApiError::not_found(format!("Not found: {}", msg)),
            ReadError::EmptyObject(msg) => {
                tracing::warn!(
                    object = %msg,
                    "Backend returned an empty payload for an existing object"
                );
                ApiError::bad_gateway(
                    "Blobstore sent empty data chunk when full file was requested",
                )
            }
            ReadError::Storage(e) => {
                tracing::error!(error = %e, "Failed to read object");
                ApiError::internal_error(format!("Storage error: {}", e))
            }
        }
    }
}

impl From<WriteError> for ApiError {
    fn from(err: WriteError) -> Self {
        match err {
            WriteError::Storage(e) => {
                tracing::error!(error = %e, "Failed to write object");
                ApiError::internal_error(format!("Storage error: {}", e))
            }
        }
    }
}

impl From<DeleteError> for ApiError {
    fn from(err: DeleteError) -> Self {
        match err {
            DeleteError::Storage(e) => {
                tracing::error!(error = %e, "Failed to delete object");
                ApiError::internal_error(format!("Storage error: {}", e))
            }
        }
    }
}
