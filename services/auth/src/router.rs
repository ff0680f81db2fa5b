use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use ecom_core::health::{healthz, readyz};
use ecom_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    register::register,
    session::get_session,
    token::{create_token, refresh_token, revoke_token},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Registration
        .route("/api/register", post(register))
        // Token
        .route(
            "/api/auth/token",
            post(create_token).patch(refresh_token).delete(revoke_token),
        )
        // Session
        .route("/api/auth/session", get(get_session))
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id_layer())
        .layer(request_id_layer())
        .with_state(state)
}
