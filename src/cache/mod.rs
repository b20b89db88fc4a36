//! Cache Module
//!
//! Per-category accumulation of provider pages with in-flight fetch
//! coalescing and staleness eviction.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::{current_timestamp_ms, CategoryEntry};
pub use stats::CacheStats;
pub use store::CacheStore;
