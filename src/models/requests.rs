//! Request DTOs for the menu configuration API
//!
//! Defines the structure of incoming HTTP request bodies.

use std::collections::HashSet;

use serde::Deserialize;

use crate::menu::{SubcategoryMapping, MAX_NAME_LENGTH};

/// Checks a category or subcategory name.
///
/// Returns an error message if validation fails, None if valid.
pub fn validate_name(kind: &str, name: &str) -> Option<String> {
    if name.trim().is_empty() {
        return Some(format!("{} name cannot be empty", kind));
    }
    if name.len() > MAX_NAME_LENGTH {
        return Some(format!(
            "{} name exceeds maximum length of {} bytes",
            kind, MAX_NAME_LENGTH
        ));
    }
    None
}

/// Request body for PUT /subcategories/mapping
///
/// The body is the mapping object itself: `{"<subcategory>": "<category>"}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct ReplaceMappingRequest {
    pub mapping: SubcategoryMapping,
}

impl ReplaceMappingRequest {
    /// Validates the request data
    pub fn validate(&self) -> Option<String> {
        self.mapping.iter().find_map(|(subcategory, category)| {
            validate_name("Subcategory", subcategory).or_else(|| validate_name("Category", category))
        })
    }
}

/// Request body for PUT /subcategories/order/:category
///
/// # Fields
/// - `subcategories`: subcategory names in display order
#[derive(Debug, Clone, Deserialize)]
pub struct SetOrderRequest {
    pub subcategories: Vec<String>,
}

impl SetOrderRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        let mut seen = HashSet::new();
        for name in &self.subcategories {
            if let Some(msg) = validate_name("Subcategory", name) {
                return Some(msg);
            }
            if !seen.insert(name.as_str()) {
                return Some(format!("Subcategory '{}' is listed more than once", name));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_order_request_deserialize() {
        let json = r#"{"subcategories": ["Coffee", "Tea"]}"#;
        let req: SetOrderRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.subcategories, vec!["Coffee", "Tea"]);
        assert!(req.validate().is_none());
    }

    #[test]
    fn test_empty_order_is_valid() {
        let req = SetOrderRequest {
            subcategories: vec![],
        };
        assert!(req.validate().is_none());
    }

    #[test]
    fn test_validate_duplicate_subcategory() {
        let req = SetOrderRequest {
            subcategories: vec!["Tea".into(), "Coffee".into(), "Tea".into()],
        };
        assert!(req.validate().unwrap().contains("more than once"));
    }

    #[test]
    fn test_validate_blank_subcategory() {
        let req = SetOrderRequest {
            subcategories: vec!["  ".into()],
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_mapping_request_deserialize() {
        let json = r#"{"Espresso": "Coffee", "Green": "Tea"}"#;
        let req: ReplaceMappingRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.mapping.len(), 2);
        assert!(req.validate().is_none());
    }

    #[test]
    fn test_mapping_request_rejects_empty_category() {
        let json = r#"{"Espresso": ""}"#;
        let req: ReplaceMappingRequest = serde_json::from_str(json).unwrap();
        assert!(req.validate().unwrap().starts_with("Category"));
    }

    #[test]
    fn test_validate_name_too_long() {
        let name = "x".repeat(MAX_NAME_LENGTH + 1);
        assert!(validate_name("Category", &name).is_some());
        assert!(validate_name("Category", &name[..MAX_NAME_LENGTH]).is_none());
    }
}
