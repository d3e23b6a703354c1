use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::errors::ApiError;
use crate::application::use_cases::DeleteObjectUseCase;
use crate::domain::value_objects::{ContainerName, ObjectKey};

/// DELETE /{key}
/// Delete an object. Missing keys are not an error.
pub async fn delete_object(
    use_case: &DeleteObjectUseCase,
    container: &ContainerName,
    key: &ObjectKey,
) -> Result<Response, ApiError> {
    use_case.execute(container, key).await?;

    Ok((StatusCode::OK, "delete successful").into_response())
}
