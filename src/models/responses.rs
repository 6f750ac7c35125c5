//! Response DTOs for the menu configuration API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;

/// Response body for GET/PUT /subcategories/order/:category
#[derive(Debug, Clone, Serialize)]
pub struct CategoryOrderResponse {
    /// Category name
    pub category: String,
    /// Subcategories in display order
    pub subcategories: Vec<String>,
}

impl CategoryOrderResponse {
    /// Creates a new CategoryOrderResponse
    pub fn new(category: impl Into<String>, subcategories: Vec<String>) -> Self {
        Self {
            category: category.into(),
            subcategories,
        }
    }
}

/// Response body for DELETE endpoints and cache clearing
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    /// Success message
    pub message: String,
}

impl MessageResponse {
    /// Creates a new MessageResponse
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response body for GET /cache/stats
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatsResponse {
    /// Cache of the subcategory mapping file
    pub subcategory_mapping: CacheStats,
    /// Cache of the subcategory order file
    pub subcategory_order: CacheStats,
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_order_response_serialize() {
        let resp = CategoryOrderResponse::new("Drinks", vec!["Coffee".into(), "Tea".into()]);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["category"], "Drinks");
        assert_eq!(json["subcategories"][1], "Tea");
    }

    #[test]
    fn test_message_response_serialize() {
        let resp = MessageResponse::new("Category 'Drinks' removed");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("Drinks"));
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }
}
