//! API Routes
//!
//! Configures the Axum router with all menu configuration endpoints.

use axum::{
    routing::{delete, get},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    cache_stats_handler, clear_cache_handler, delete_category_order_handler,
    get_category_order_handler, get_mapping_handler, get_order_handler, health_handler,
    put_category_order_handler, put_mapping_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET|PUT /subcategories/mapping` - Subcategory → category mapping
/// - `GET /subcategories/order` - Display order of every category
/// - `GET|PUT|DELETE /subcategories/order/:category` - Display order of one category
/// - `GET /cache/stats` - Cache diagnostics
/// - `DELETE /cache` - Drop all cached files
/// - `GET /health` - Health check endpoint
///
/// Write endpoints require the `x-admin-key` header.
///
/// # Middleware
/// - CORS: Allows any origin (the admin UI is served separately)
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/subcategories/mapping",
            get(get_mapping_handler).put(put_mapping_handler),
        )
        .route("/subcategories/order", get(get_order_handler))
        .route(
            "/subcategories/order/:category",
            get(get_category_order_handler)
                .put(put_category_order_handler)
                .delete(delete_category_order_handler),
        )
        .route("/cache/stats", get(cache_stats_handler))
        .route("/cache", delete(clear_cache_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
