use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use mockdb_core::health::{health, healthz, readyz};
use mockdb_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    fallback::{method_not_allowed, route_not_found},
    info::get_info,
    product::{get_product, list_products},
    user::{get_user, list_users},
};
use crate::state::AppState;

/// Method and path of every route, logged at startup.
pub const ENDPOINTS: &[(&str, &str, &str)] = &[
    ("GET", "/health", "Health check"),
    ("GET", "/users", "Get all users"),
    ("GET", "/users/{id}", "Get user by ID"),
    ("GET", "/products", "Get all products"),
    ("GET", "/products/{id}", "Get product by ID"),
    ("GET", "/info", "Database info"),
];

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(health))
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Users
        .route("/users", get(list_users))
        .route("/users/{id}", get(get_user))
        // Products
        .route("/products", get(list_products))
        .route("/products/{id}", get(get_product))
        // Info
        .route("/info", get(get_info))
        .fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(TraceLayer::new_for_http())
                .layer(propagate_request_id_layer()),
        )
        .with_state(state)
}
