//! Menu CMS - Menu configuration service
//!
//! Serves the restaurant menu's subcategory mapping and display order from
//! JSON files, read through a bounded-freshness in-memory cache.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod menu;
pub mod models;

pub use api::AppState;
pub use cache::ReadCache;
pub use config::Config;
pub use menu::MenuConfigRepository;
