//! API Module
//!
//! HTTP handlers and routing for the menu configuration REST API.
//!
//! # Endpoints
//! - `GET|PUT /subcategories/mapping` - Subcategory → category mapping
//! - `GET /subcategories/order` - Display order of every category
//! - `GET|PUT|DELETE /subcategories/order/:category` - Display order of one category
//! - `GET /cache/stats` - Cache diagnostics
//! - `DELETE /cache` - Drop all cached files
//! - `GET /health` - Health check endpoint

pub mod auth;
pub mod handlers;
pub mod routes;

pub use auth::{AdminAuth, ADMIN_KEY_HEADER};
pub use handlers::*;
pub use routes::create_router;
