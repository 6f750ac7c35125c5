//! Menu Configuration Module
//!
//! Typed shapes and storage for the low-churn menu configuration files.

use std::collections::BTreeMap;

mod repository;

pub use repository::MenuConfigRepository;

/// Subcategory name → owning category name
pub type SubcategoryMapping = BTreeMap<String, String>;

/// Category name → subcategory names in display order
pub type SubcategoryOrder = BTreeMap<String, Vec<String>>;

/// File name of the subcategory mapping inside the data directory
pub const MAPPING_FILE: &str = "subcategory-mapping.json";

/// File name of the subcategory order inside the data directory
pub const ORDER_FILE: &str = "subcategory-order.json";

/// Maximum length in bytes of a category or subcategory name
pub const MAX_NAME_LENGTH: usize = 256;
