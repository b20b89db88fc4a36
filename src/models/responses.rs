//! Response DTOs for the image cache server API
//!
//! Defines the structure of outgoing HTTP response bodies. The image
//! endpoints themselves answer with a bare JSON array of items.

use serde::Serialize;

use crate::cache::CacheStats;

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Page reads served from cached items
    pub hits: u64,
    /// Page reads that had to wait for a provider fetch
    pub misses: u64,
    /// Provider calls issued
    pub provider_fetches: u64,
    /// Fetch requests coalesced into an earlier or outstanding fetch
    pub coalesced_fetches: u64,
    /// Entries removed by the stale sweep
    pub evictions: u64,
    /// Current number of cached categories
    pub total_entries: usize,
    /// Items held across all categories
    pub total_items: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(stats: &CacheStats) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            provider_fetches: stats.provider_fetches,
            coalesced_fetches: stats.coalesced_fetches,
            evictions: stats.evictions,
            total_entries: stats.total_entries,
            total_items: stats.total_items,
            hit_rate: stats.hit_rate(),
        }
    }
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

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Always "error"
    pub status: String,
    /// Error message describing what went wrong
    pub message: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}
