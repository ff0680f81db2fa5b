use axum::{
    Router,
    http::{Method, header},
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use ecom_core::health::{healthz, readyz};
use ecom_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    billboard::{
        create_billboard, delete_billboard, get_billboard, list_billboards, update_billboard,
    },
    category::{create_category, delete_category, get_category, list_categories, update_category},
    color::{create_color, delete_color, get_color, list_colors, update_color},
    order::{checkout, checkout_options, list_orders},
    product::{create_product, delete_product, get_product, list_products, update_product},
    size::{create_size, delete_size, get_size, list_sizes, update_size},
    store::{create_store, delete_store, get_store, list_stores, update_store},
};
use crate::state::AppState;

/// Storefronts on other origins call checkout directly from the browser.
fn checkout_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Stores
        .route("/api/stores", get(list_stores).post(create_store))
        .route(
            "/api/stores/{store_id}",
            get(get_store).patch(update_store).delete(delete_store),
        )
        // Billboards
        .route(
            "/api/{store_id}/billboards",
            get(list_billboards).post(create_billboard),
        )
        .route(
            "/api/{store_id}/billboards/{id}",
            get(get_billboard)
                .patch(update_billboard)
                .delete(delete_billboard),
        )
        // Categories
        .route(
            "/api/{store_id}/categories",
            get(list_categories).post(create_category),
        )
        .route(
            "/api/{store_id}/categories/{id}",
            get(get_category)
                .patch(update_category)
                .delete(delete_category),
        )
        // Sizes
        .route("/api/{store_id}/sizes", get(list_sizes).post(create_size))
        .route(
            "/api/{store_id}/sizes/{id}",
            get(get_size).patch(update_size).delete(delete_size),
        )
        // Colors
        .route("/api/{store_id}/colors", get(list_colors).post(create_color))
        .route(
            "/api/{store_id}/colors/{id}",
            get(get_color).patch(update_color).delete(delete_color),
        )
        // Products
        .route(
            "/api/{store_id}/products",
            get(list_products).post(create_product),
        )
        .route(
            "/api/{store_id}/products/{id}",
            get(get_product).patch(update_product).delete(delete_product),
        )
        // Orders
        .route("/api/{store_id}/orders", get(list_orders))
        .route(
            "/api/{store_id}/checkout",
            post(checkout)
                .options(checkout_options)
                .layer(checkout_cors()),
        )
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id_layer())
        .layer(request_id_layer())
        .with_state(state)
}
