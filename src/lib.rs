//! Image Page Cache - A windowed pagination cache for image search
//!
//! Serves small client pages out of large provider pages, prefetching ahead
//! of readers and evicting categories that have gone stale.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod provider;
pub mod reader;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_stale_sweeper;
