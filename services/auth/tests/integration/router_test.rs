use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use sea_orm::DatabaseConnection;
use tower::ServiceExt;
use uuid::Uuid;

use ecom_auth::router::build_router;
use ecom_auth::state::AppState;
use ecom_auth_types::identity::JwtSecret;
use ecom_testing::auth::{MockAuth, TEST_JWT_SECRET};
use ecom_testing::body::json_body;

// Handlers that reach the database would fail with INTERNAL; these cases never do.
fn app() -> axum::Router {
    build_router(AppState {
        db: DatabaseConnection::Disconnected,
        jwt_secret: JwtSecret::new(TEST_JWT_SECRET),
        cookie_domain: "shop.example".into(),
    })
}

#[tokio::test]
async fn healthz_returns_200() {
    let resp = app()
        .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn readyz_returns_503_without_database() {
    let resp = app()
        .oneshot(Request::get("/readyz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn register_rejects_invalid_payload_with_422() {
    let body = serde_json::json!({
        "name": "Al",
        "email": "nope",
        "password": "short",
        "confirm": "short",
    });
    let resp = app()
        .oneshot(
            Request::post("/api/register")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = json_body(resp).await;
    assert_eq!(json["kind"], "VALIDATION");
    assert!(json["errors"].as_array().unwrap().len() >= 3);
}

#[tokio::test]
async fn register_rejects_malformed_json_with_422() {
    let resp = app()
        .oneshot(
            Request::post("/api/register")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"name\":"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json_body(resp).await["kind"], "INVALID_BODY");
}

#[tokio::test]
async fn session_requires_access_token() {
    let resp = app()
        .oneshot(Request::get("/api/auth/session").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(json_body(resp).await["kind"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn refresh_without_cookie_returns_401() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method(Method::PATCH)
                .uri("/api/auth/token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(json_body(resp).await["kind"], "INVALID_REFRESH_TOKEN");
}

#[tokio::test]
async fn refresh_rejects_access_token_in_refresh_cookie() {
    let access = MockAuth::new(Uuid::new_v4()).token(ecom_auth_types::token::TokenKind::Access);
    let resp = app()
        .oneshot(
            Request::builder()
                .method(Method::PATCH)
                .uri("/api/auth/token")
                .header(header::COOKIE, format!("ecom_refresh_token={access}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn revoke_clears_both_cookies() {
    let resp = app()
        .oneshot(
            Request::delete("/api/auth/token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let cookies: Vec<_> = resp
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_owned())
        .collect();
    assert_eq!(cookies.len(), 2);
    assert!(cookies.iter().all(|c| c.contains("Max-Age=0")));
}
