use sea_orm::Database;
use tracing::info;

use ecom_auth::config::AuthConfig;
use ecom_auth::router::build_router;
use ecom_auth::state::AppState;
use ecom_auth_types::identity::JwtSecret;
use ecom_core::tracing::init_tracing;

#[tokio::main]
async fn main() {
    let config = AuthConfig::from_env().expect("invalid auth configuration");
    init_tracing(config.app_env);

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        jwt_secret: JwtSecret::new(config.jwt_secret),
        cookie_domain: config.cookie_domain,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.auth_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("auth service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
