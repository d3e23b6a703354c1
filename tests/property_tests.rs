//! Property-based tests for key parsing and the write/read contract


use axum::http::{header, StatusCode};
use proptest::prelude::*;
use tower::ServiceExt;

use blob_gateway::domain_errors::DomainError;
use blob_gateway::value_objects::ObjectKey;
use test_fixtures::http::{self, body_bytes};
use test_fixtures::memory_app;

fn segment() -> impl Strategy<Value = String> {
    "[A-Za-z0-9._~-]{1,32}"
}

fn content_type() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("text/plain"),
        Just("application/json"),
        Just("image/png"),
        Just("application/octet-stream"),
    ]
}

proptest! {
    #[test]
    fn single_segments_parse_to_themselves(name in segment()) {
        let key = ObjectKey::from_path(&format!("/{}", name)).unwrap();
        prop_assert_eq!(key.as_str(), name.as_str());
    }

    #[test]
    fn nested_paths_are_rejected(parts in prop::collection::vec(segment(), 2..5)) {
        let path = format!("/{}", parts.join("/"));
        let err = ObjectKey::from_path(&path).unwrap_err();
        prop_assert!(matches!(err, DomainError::SubpathNotSupported(_)));
    }

    #[test]
    fn surrounding_slashes_are_ignored(name in segment(), leading in 1usize..3, trailing in 0usize..3) {
        let path = format!("{}{}{}", "/".repeat(leading), name, "/".repeat(trailing));
        let key = ObjectKey::from_path(&path).unwrap();
        prop_assert_eq!(key.as_str(), name.as_str());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn written_objects_read_back_unchanged(
        name in segment(),
        payload in prop::collection::vec(any::<u8>(), 1..2048),
        content_type in content_type(),
    ) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();

        let (status, returned_type, returned) = runtime.block_on(async {
            let app = memory_app();
            let uri = format!("/{}", name);

            let response = app
                .clone()
                .oneshot(http::post(&uri, content_type, payload.clone()))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);

            let response = app.oneshot(http::get(&uri)).await.unwrap();
            let status = response.status();
            let returned_type = response
                .headers()
                .get(header::CONTENT_TYPE)
                .map(|v| v.to_str().unwrap().to_string());
            (status, returned_type, body_bytes(response).await)
        });

        prop_assert_eq!(status, StatusCode::OK);
        prop_assert_eq!(returned_type.as_deref(), Some(content_type));
        prop_assert_eq!(returned, payload);
    }
}
