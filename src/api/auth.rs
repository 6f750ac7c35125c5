//! Admin Authentication
//!
//! Header check guarding the write endpoints.

use axum::http::HeaderMap;
use subtle::ConstantTimeEq;
use tracing::warn;

use crate::error::{AppError, Result};

/// Header carrying the admin key
pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

/// Admin credentials for write endpoints.
#[derive(Debug, Clone, Default)]
pub struct AdminAuth {
    /// Expected header value; None disables every write endpoint
    key: Option<String>,
}

impl AdminAuth {
    /// Creates the check from an optional configured key.
    pub fn new(key: Option<String>) -> Self {
        Self {
            key: key.filter(|k| !k.is_empty()),
        }
    }

    /// Check if a key is configured
    pub fn is_enabled(&self) -> bool {
        self.key.is_some()
    }

    /// Verifies the admin header of a request.
    pub fn authorize(&self, headers: &HeaderMap) -> Result<()> {
        let Some(expected) = self.key.as_deref() else {
            warn!("Write attempted but no admin key is configured");
            return Err(AppError::Unauthorized(
                "Admin endpoints are disabled".to_string(),
            ));
        };

        let provided = headers
            .get(ADMIN_KEY_HEADER)
            .and_then(|value| value.to_str().ok());

        match provided {
            Some(key) if keys_match(key, expected) => Ok(()),
            Some(_) => {
                warn!("Rejected write with wrong admin key");
                Err(AppError::Unauthorized("Invalid admin key".to_string()))
            }
            None => Err(AppError::Unauthorized(format!(
                "Missing {} header",
                ADMIN_KEY_HEADER
            ))),
        }
    }
}

/// Compares two keys in time independent of where they differ.
fn keys_match(provided: &str, expected: &str) -> bool {
    provided.as_bytes().ct_eq(expected.as_bytes()).into()
}
