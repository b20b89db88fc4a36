//! Data models for the image cache server
//!
//! Defines the cached `Item` type and the DTOs used for
//! serializing/deserializing HTTP request and response bodies.

pub mod item;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use item::Item;
pub use requests::{ImagesQuery, SortedImagesQuery};
pub use responses::{ErrorResponse, HealthResponse, StatsResponse};
