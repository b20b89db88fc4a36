//! Error types for the image cache server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::models::ErrorResponse;
use crate::provider::ProviderError;

/// Message sent to clients for every server-side failure.
pub const GENERIC_ERROR_MESSAGE: &str = "Internal Server Error";

// == Image Cache Error Enum ==
/// Unified error type for the image cache server.
#[derive(Error, Debug)]
pub enum ImageCacheError {
    /// The provider call failed or returned an unexpected shape
    #[error("Fetch failed: {0}")]
    FetchFailed(#[from] ProviderError),

    /// Category has no cache entry
    #[error("Category not cached: {0}")]
    NotFound(String),

    /// Invalid request parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ImageCacheError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ImageCacheError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ImageCacheError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ImageCacheError::FetchFailed(_) | ImageCacheError::Internal(_) => {
                // Details stay in the log; clients get a generic body.
                error!("Request failed: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    GENERIC_ERROR_MESSAGE.to_string(),
                )
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the image cache server.
pub type Result<T> = std::result::Result<T, ImageCacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_failed_maps_to_500() {
        let err = ImageCacheError::from(ProviderError::RateLimitExceeded);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_invalid_request_maps_to_400() {
        let response = ImageCacheError::InvalidRequest("missing category".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = ImageCacheError::NotFound("cats".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
