//! Request handling.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) for every request
//! - Read the body and parse it as untyped JSON for the validation layer
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - Body problems become structured `ApiError`s, never axum's plain-text rejections

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{HeaderMap, HeaderValue, StatusCode},
};
use serde_json::Value;
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

use crate::error::ApiError;

/// Header carrying the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Generates UUID v4 request IDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Read the request ID from headers, if one was set.
pub fn request_id(headers: &HeaderMap) -> &str {
    headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}

/// A request body parsed as untyped JSON.
///
/// Unlike `axum::Json`, this does not require a `Content-Type` header and
/// does not deserialize into a typed record; schema checks happen afterwards.
#[derive(Debug, Clone)]
pub struct Payload(pub Value);

impl<S> FromRequest<S> for Payload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                ApiError::PayloadTooLarge
            } else {
                ApiError::MalformedBody(rejection.body_text())
            }
        })?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(ApiError::MalformedBody("request body is empty".to_string()));
        }

        serde_json::from_slice(&bytes)
            .map(Payload)
            .map_err(|e| ApiError::MalformedBody(format!("request body is not valid JSON: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn post(body: &'static str) -> Request {
        axum::http::Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_parses_json_without_content_type() {
        let Payload(value) = Payload::from_request(post(r#"{"a": 1}"#), &()).await.unwrap();
        assert_eq!(value["a"], 1);
    }

    #[tokio::test]
    async fn test_empty_body_rejected() {
        let err = Payload::from_request(post("  "), &()).await.unwrap_err();
        assert!(matches!(err, ApiError::MalformedBody(ref m) if m == "request body is empty"));
    }

    #[tokio::test]
    async fn test_invalid_json_rejected() {
        let err = Payload::from_request(post("{nope"), &()).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "MALFORMED_BODY");
    }

    #[test]
    fn test_request_ids_are_unique_uuids() {
        let mut make = UuidRequestId;
        let req = axum::http::Request::new(());
        let a = make.make_request_id(&req).unwrap();
        let b = make.make_request_id(&req).unwrap();

        let a = a.header_value().to_str().unwrap().to_string();
        let b = b.header_value().to_str().unwrap().to_string();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(&a).is_ok());
    }

    #[test]
    fn test_request_id_falls_back_to_unknown() {
        assert_eq!(request_id(&HeaderMap::new()), "unknown");
    }
}
