//! Request and Response models for the menu configuration API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{validate_name, ReplaceMappingRequest, SetOrderRequest};
pub use responses::{CacheStatsResponse, CategoryOrderResponse, HealthResponse, MessageResponse};
