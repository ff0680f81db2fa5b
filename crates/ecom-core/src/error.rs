use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Uniform JSON error body: `{"kind", "message", "errors"?}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody<E: Serialize> {
    pub kind: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<E>,
}

/// Build an error response. Service error enums call this from `IntoResponse`.
pub fn error_response<E: Serialize>(
    status: StatusCode,
    kind: &'static str,
    message: String,
    errors: Option<E>,
) -> Response {
    (
        status,
        Json(ErrorBody {
            kind,
            message,
            errors,
        }),
    )
        .into_response()
}
