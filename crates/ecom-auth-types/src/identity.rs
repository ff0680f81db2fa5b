//! Authenticated-caller extractor.

use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum::response::{IntoResponse, Response};
use axum_extra::extract::CookieJar;
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Bearer};
use http::StatusCode;
use http::request::Parts;
use uuid::Uuid;

use crate::cookie::ACCESS_TOKEN_COOKIE;
use crate::token::{AuthError, validate_access_token};

/// HMAC secret used to verify access tokens. Services provide it via `FromRef`.
#[derive(Clone)]
pub struct JwtSecret(pub Arc<str>);

impl JwtSecret {
    pub fn new(secret: impl Into<Arc<str>>) -> Self {
        Self(secret.into())
    }
}

/// The caller behind a valid access token.
///
/// The token is read from `Authorization: Bearer` first, then from the access-token cookie.
/// Store ownership (403) is checked by use cases after extraction.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: Uuid,
    pub username: Option<String>,
}

/// 401 returned when no valid access token accompanies the request.
#[derive(Debug, thiserror::Error)]
pub enum IdentityRejection {
    #[error("authentication required")]
    Missing,
    #[error("invalid access token")]
    Invalid(#[source] AuthError),
}

impl IntoResponse for IdentityRejection {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "kind": "UNAUTHENTICATED",
            "message": self.to_string(),
        });
        (StatusCode::UNAUTHORIZED, axum::Json(body)).into_response()
    }
}

fn access_token(parts: &Parts) -> Option<String> {
    if let Some(Authorization(bearer)) = parts.headers.typed_get::<Authorization<Bearer>>() {
        return Some(bearer.token().to_owned());
    }
    CookieJar::from_headers(&parts.headers)
        .get(ACCESS_TOKEN_COOKIE)
        .map(|c| c.value().to_owned())
        .filter(|v| !v.is_empty())
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
    JwtSecret: FromRef<S>,
{
    type Rejection = IdentityRejection;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // Validate synchronously and return a 'static async block to avoid E0195.
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let secret = JwtSecret::from_ref(state);
        let result = match access_token(parts) {
            Some(token) => {
                validate_access_token(&token, &secret.0).map_err(IdentityRejection::Invalid)
            }
            None => Err(IdentityRejection::Missing),
        };

        async move {
            let info = result?;
            Ok(Self {
                user_id: info.user_id,
                username: info.username,
            })
        }
    }
}
