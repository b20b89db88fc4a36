//! Image Provider Module
//!
//! The outbound seam of the cache: something that can return one
//! provider-sized page of items for a category.

mod pixabay;

#[cfg(test)]
pub(crate) mod fake;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::Item;

pub use pixabay::PixabayClient;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    ParseError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ProviderError>;

/// Source of paged image search results.
///
/// Pages are 1-based. A page past the end of the result set yields an empty
/// vector rather than an error where the provider allows telling the two apart.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    async fn fetch_page(&self, category: &str, page: u32) -> Result<Vec<Item>>;
}
