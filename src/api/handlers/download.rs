use axum::{
    body::Body,
    http::{header, StatusCode},
    response::Response,
};

use crate::api::errors::ApiError;
use crate::application::use_cases::ReadObjectUseCase;
use crate::domain::value_objects::{ContainerName, ObjectKey};

/// GET /{key}
/// Return the whole object with its stored content type
pub async fn read_object(
    use_case: &ReadObjectUseCase,
    container: &ContainerName,
    key: &ObjectKey,
) -> Result<Response, ApiError> {
    let object = use_case.execute(container, key).await?;

    tracing::info!(container = %container, key = %key, "successfully got an object");

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, object.content_type.as_str())
        .header(header::CONTENT_LENGTH, object.bytes.len().to_string())
        .body(Body::from(object.bytes))
        .map_err(|e| ApiError::internal_error(format!("Failed to build response: {}", e)))
}
