//! Request extractors.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON body extractor that ignores `Content-Type`.
///
/// Unlike `axum::Json`, undecodable JSON is a 400 and a body that cannot be
/// read is a server error, matching what the web client expects. Bodies over
/// the router's limit (axum's `DefaultBodyLimit`, 2 MB unless overridden) are
/// a 413.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                ApiError::PayloadTooLarge(rejection.body_text())
            } else {
                ApiError::UnreadableBody(rejection.body_text())
            }
        })?;

        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|e| ApiError::InvalidJson(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::Body;
    use axum::extract::DefaultBodyLimit;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::Value;
    use tower::ServiceExt;

    async fn echo(JsonBody(value): JsonBody<Value>) -> Json<Value> {
        Json(value)
    }

    async fn post_body(body: &'static str) -> (StatusCode, Value) {
        let app = Router::new()
            .route("/echo", post(echo))
            .layer(DefaultBodyLimit::max(16));
        let request = Request::builder()
            .method("POST")
            .uri("/echo")
            .body(Body::from(body))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body_bytes).unwrap())
    }

    #[tokio::test]
    async fn test_body_within_limit_is_decoded() {
        let (status, json) = post_body(r#"{"a":1}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["a"], 1);
    }

    #[tokio::test]
    async fn test_body_over_limit_returns_413() {
        let (status, json) = post_body(r#"{"current_scene_id":"chapter1"}"#).await;

        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(json["error"], "payload_too_large");
    }

    #[tokio::test]
    async fn test_undecodable_body_returns_400() {
        let (status, json) = post_body("{ nope").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "invalid_request");
    }
}
