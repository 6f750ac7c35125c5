//! Error types for the menu configuration service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::cache::LoadError;

// == App Error Enum ==
/// Unified error type for the service.
#[derive(Error, Debug)]
pub enum AppError {
    /// Requested resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Missing or wrong admin key
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// A configuration file could not be read or parsed
    #[error(transparent)]
    Load(#[from] LoadError),

    /// A configuration file could not be written
    #[error("Failed to persist {0}")]
    Persist(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Load(_) | AppError::Persist(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the service.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn render(error: AppError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_status_codes() {
        let (status, _) = render(AppError::NotFound("x".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = render(AppError::InvalidRequest("x".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = render(AppError::Unauthorized("x".into())).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = render(AppError::Persist("x".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_body_carries_message() {
        let (_, body) = render(AppError::NotFound("category 'Desserts'".into())).await;
        assert_eq!(body["error"], "Not found: category 'Desserts'");
    }

    #[tokio::test]
    async fn test_load_error_is_server_error() {
        let parse_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = AppError::from(LoadError::Parse {
            path: "data/order.json".into(),
            source: parse_error,
        });

        let (status, body) = render(error).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().contains("data/order.json"));
    }
}
