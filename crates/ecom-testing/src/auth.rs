//! Signed-token helpers for router tests.

use std::time::{SystemTime, UNIX_EPOCH};

use axum::http::{HeaderMap, HeaderValue, header};
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use ecom_auth_types::token::{JwtClaims, TokenKind};

/// Secret shared between `MockAuth` and the router under test.
pub const TEST_JWT_SECRET: &str = "test-jwt-secret";

/// A caller that authenticates with a freshly signed access token.
pub struct MockAuth {
    pub user_id: Uuid,
    pub username: Option<String>,
}

impl MockAuth {
    pub fn new(user_id: Uuid) -> Self {
        Self {
            user_id,
            username: None,
        }
    }

    pub fn token(&self, kind: TokenKind) -> String {
        let exp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default()
            + 3600;
        let claims = JwtClaims {
            sub: self.user_id.to_string(),
            username: self.username.clone(),
            kind,
            exp,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
        )
        .unwrap()
    }

    /// `Authorization: Bearer <access token>`.
    pub fn headers(&self) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.token(TokenKind::Access))).unwrap(),
        );
        map
    }
}
