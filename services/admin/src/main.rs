use sea_orm::Database;
use tracing::info;

use ecom_admin::config::AdminConfig;
use ecom_admin::router::build_router;
use ecom_admin::state::AppState;
use ecom_auth_types::identity::JwtSecret;
use ecom_core::tracing::init_tracing;

#[tokio::main]
async fn main() {
    let config = AdminConfig::from_env().expect("invalid admin configuration");
    init_tracing(config.app_env);

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        jwt_secret: JwtSecret::new(config.jwt_secret),
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.admin_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("admin service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
