//! Reader Module
//!
//! Client-facing views over the cache store: fixed-size windows in fetch
//! order, and sorted first pages.

mod sorted;
mod windowed;

pub use sorted::{SortKey, SortedReader};
pub use windowed::WindowedReader;
