//! Category Entry Module
//!
//! Accumulated provider results for a single category.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::models::Item;

// == Category Entry ==
/// Items fetched so far for one category plus fetch bookkeeping.
///
/// `items` is always the concatenation of provider pages
/// `1..=last_fetched_page` in page order. Clones share the item buffer, so a
/// snapshot handed to a reader is unaffected by later appends.
#[derive(Debug, Clone)]
pub struct CategoryEntry {
    /// Accumulated items in provider fetch order
    pub items: Arc<Vec<Item>>,
    /// Highest provider page merged into `items`
    pub last_fetched_page: u32,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Timestamp of the most recent merge (Unix milliseconds)
    pub last_fetched_at: u64,
    /// Set once the provider returned a short page; no later pages exist
    pub exhausted: bool,
}

impl CategoryEntry {
    // == Constructor ==
    /// Creates an entry holding the given page of items.
    pub fn new(items: Vec<Item>, page: u32) -> Self {
        let now = current_timestamp_ms();
        Self {
            items: Arc::new(items),
            last_fetched_page: page,
            created_at: now,
            last_fetched_at: now,
            exhausted: false,
        }
    }

    // == Append ==
    /// Appends the items of `page` and refreshes the fetch timestamp.
    pub fn append(&mut self, items: Vec<Item>, page: u32) {
        Arc::make_mut(&mut self.items).extend(items);
        self.last_fetched_page = page;
        self.last_fetched_at = current_timestamp_ms();
    }

    /// Provider page that would extend this entry without a gap.
    pub fn next_page(&self) -> u32 {
        self.last_fetched_page + 1
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // == Window ==
    /// Returns `items[start..end]`, clamped to what has been accumulated.
    pub fn window(&self, start: usize, end: usize) -> Vec<Item> {
        let end = end.min(self.items.len());
        if start >= end {
            return Vec::new();
        }
        self.items[start..end].to_vec()
    }

    // == Staleness ==
    /// Milliseconds elapsed since the last merge, as seen at `now_ms`.
    pub fn age_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.last_fetched_at)
    }

    /// An entry is stale once its age strictly exceeds the expiration window.
    pub fn is_stale(&self, now_ms: u64, expiration_ms: u64) -> bool {
        self.age_ms(now_ms) > expiration_ms
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
