//! Per-request container selection.
//!
//! The `blobby-container` header wins, then the `container` query
//! parameter, then the configured default.

use axum::{
    extract::Query,
    http::{HeaderMap, Uri},
};
use serde::Deserialize;

use crate::api::errors::ApiError;
use crate::domain::value_objects::ContainerName;

pub const CONTAINER_HEADER_NAME: &str = "blobby-container";
pub const CONTAINER_PARAM_NAME: &str = "container";

#[derive(Deserialize, Default)]
struct ContainerQuery {
    container: Option<String>,
}

/// Resolve the container a request targets
pub fn resolve_container_name(
    headers: &HeaderMap,
    uri: &Uri,
    default: &ContainerName,
) -> Result<ContainerName, ApiError> {
    if let Some(value) = headers.get(CONTAINER_HEADER_NAME) {
        let name = value.to_str().map_err(|_| {
            ApiError::bad_request(format!("{} header must be ASCII", CONTAINER_HEADER_NAME))
        })?;
        return Ok(ContainerName::new(name)?);
    }

    let Query(query) = Query::<ContainerQuery>::try_from_uri(uri)
        .map_err(|e| ApiError::bad_request(format!("Invalid query string: {}", e.body_text())))?;

    match query.container {
        Some(name) => Ok(ContainerName::new(name)?),
        None => Ok(default.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, StatusCode};

    fn default() -> ContainerName {
        ContainerName::default()
    }

    #[test]
    fn test_falls_back_to_default() {
        let uri: Uri = "/report.txt".parse().unwrap();
        let name = resolve_container_name(&HeaderMap::new(), &uri, &default()).unwrap();
        assert_eq!(name, default());
    }

    #[test]
    fn test_query_parameter_selects_container() {
        let uri: Uri = "/report.txt?container=photos&other=1".parse().unwrap();
        let name = resolve_container_name(&HeaderMap::new(), &uri, &default()).unwrap();
        assert_eq!(name.as_str(), "photos");
    }

    #[test]
    fn test_header_wins_over_query_parameter() {
        let uri: Uri = "/report.txt?container=photos".parse().unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(CONTAINER_HEADER_NAME, HeaderValue::from_static("videos"));

        let name = resolve_container_name(&headers, &uri, &default()).unwrap();
        assert_eq!(name.as_str(), "videos");
    }

    #[test]
    fn test_invalid_container_is_bad_request() {
        let uri: Uri = "/report.txt?container=Not%20Valid".parse().unwrap();
        let err = resolve_container_name(&HeaderMap::new(), &uri, &default()).unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let mut headers = HeaderMap::new();
        headers.insert(CONTAINER_HEADER_NAME, HeaderValue::from_static(""));
        let uri: Uri = "/a".parse().unwrap();
        let err = resolve_container_name(&headers, &uri, &default()).unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
