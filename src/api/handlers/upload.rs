use axum::{
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;

use crate::api::errors::ApiError;
use crate::application::dto::WriteRequest;
use crate::application::use_cases::WriteObjectUseCase;
use crate::domain::value_objects::{ContainerName, ContentType, ObjectKey};

/// First `content-type` value of the request
pub fn content_type_from_headers(headers: &HeaderMap) -> Result<ContentType, ApiError> {
    let value = headers
        .get_all(header::CONTENT_TYPE)
        .iter()
        .next()
        .ok_or_else(|| ApiError::bad_request("Missing content-type header"))?;

    let value = value
        .to_str()
        .map_err(|_| ApiError::bad_request("content-type header must be visible ASCII"))?;

    Ok(ContentType::new(value)?)
}

/// POST /{key}
/// Create or overwrite an object with the request body
pub async fn write_object(
    use_case: &WriteObjectUseCase,
    container: ContainerName,
    key: ObjectKey,
    bytes: Bytes,
    content_type: ContentType,
) -> Result<Response, ApiError> {
    use_case
        .execute(WriteRequest {
            container,
            key,
            bytes,
            content_type,
        })
        .await?;

    Ok((StatusCode::OK, "upload complete").into_response())
}
