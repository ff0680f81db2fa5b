use axum::body::{Body, to_bytes};
use axum::response::Response;

/// Read a response body as JSON. Panics on non-JSON bodies.
pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
