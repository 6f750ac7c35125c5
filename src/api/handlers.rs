//! API Handlers
//!
//! HTTP request handlers for each menu configuration endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use tracing::info;

use crate::api::auth::AdminAuth;
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::menu::{MenuConfigRepository, SubcategoryMapping, SubcategoryOrder};
use crate::models::{
    validate_name, CacheStatsResponse, CategoryOrderResponse, HealthResponse, MessageResponse,
    ReplaceMappingRequest, SetOrderRequest,
};

/// Application state shared across all handlers.
///
/// The repository owns the configuration caches; cloning the state shares them.
#[derive(Clone)]
pub struct AppState {
    /// File-backed configuration storage
    pub repository: Arc<MenuConfigRepository>,
    /// Admin header check for write endpoints
    pub auth: Arc<AdminAuth>,
}

impl AppState {
    /// Creates a new AppState with the given repository and admin check.
    pub fn new(repository: MenuConfigRepository, auth: AdminAuth) -> Self {
        Self {
            repository: Arc::new(repository),
            auth: Arc::new(auth),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            MenuConfigRepository::from_config(config),
            AdminAuth::new(config.admin_key.clone()),
        )
    }
}

/// Validates a category taken from the request path.
fn check_category(category: &str) -> Result<()> {
    match validate_name("Category", category) {
        Some(msg) => Err(AppError::InvalidRequest(msg)),
        None => Ok(()),
    }
}

/// Handler for GET /subcategories/mapping
pub async fn get_mapping_handler(State(state): State<AppState>) -> Result<Json<SubcategoryMapping>> {
    Ok(Json(state.repository.subcategory_mapping().await?))
}

/// Handler for PUT /subcategories/mapping
///
/// Replaces the whole subcategory → category mapping.
pub async fn put_mapping_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<ReplaceMappingRequest>,
) -> Result<Json<SubcategoryMapping>> {
    state.auth.authorize(&headers)?;

    if let Some(error_msg) = req.validate() {
        return Err(AppError::InvalidRequest(error_msg));
    }

    let saved = state
        .repository
        .replace_subcategory_mapping(req.mapping)
        .await?;

    Ok(Json(saved))
}

/// Handler for GET /subcategories/order
pub async fn get_order_handler(State(state): State<AppState>) -> Result<Json<SubcategoryOrder>> {
    Ok(Json(state.repository.subcategory_order().await?))
}

/// Handler for GET /subcategories/order/:category
pub async fn get_category_order_handler(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<CategoryOrderResponse>> {
    let subcategories = state
        .repository
        .category_order(&category)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No order stored for category '{}'", category)))?;

    Ok(Json(CategoryOrderResponse::new(category, subcategories)))
}

/// Handler for PUT /subcategories/order/:category
///
/// Stores the display order of one category's subcategories.
pub async fn put_category_order_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(category): Path<String>,
    Json(req): Json<SetOrderRequest>,
) -> Result<Json<CategoryOrderResponse>> {
    state.auth.authorize(&headers)?;
    check_category(&category)?;

    if let Some(error_msg) = req.validate() {
        return Err(AppError::InvalidRequest(error_msg));
    }

    let saved = state
        .repository
        .set_category_order(&category, req.subcategories)
        .await?;

    Ok(Json(CategoryOrderResponse::new(category, saved)))
}

/// Handler for DELETE /subcategories/order/:category
pub async fn delete_category_order_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(category): Path<String>,
) -> Result<Json<MessageResponse>> {
    state.auth.authorize(&headers)?;

    if !state.repository.remove_category_order(&category).await? {
        return Err(AppError::NotFound(format!(
            "No order stored for category '{}'",
            category
        )));
    }

    Ok(Json(MessageResponse::new(format!(
        "Order for category '{}' removed",
        category
    ))))
}

/// Handler for GET /cache/stats
pub async fn cache_stats_handler(State(state): State<AppState>) -> Json<CacheStatsResponse> {
    Json(CacheStatsResponse {
        subcategory_mapping: state.repository.mapping_cache_stats().await,
        subcategory_order: state.repository.order_cache_stats().await,
    })
}

/// Handler for DELETE /cache
///
/// Drops every cached file; the next reads go to disk.
pub async fn clear_cache_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<MessageResponse>> {
    state.auth.authorize(&headers)?;

    state.repository.clear_caches().await;
    info!("Caches cleared via API");

    Ok(Json(MessageResponse::new("Caches cleared")))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
