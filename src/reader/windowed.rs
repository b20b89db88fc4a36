//! Windowed Reader
//!
//! Serves client pages out of the accumulated provider pages, fetching on a
//! miss and prefetching the next provider page when a client gets close to
//! the end of what is cached.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::cache::CacheStore;
use crate::error::Result;
use crate::models::Item;

/// Translates client page numbers into slices of a category's items.
#[derive(Clone)]
pub struct WindowedReader {
    store: Arc<CacheStore>,
    client_page_size: usize,
    /// Prefetch once a page ends within this many items of the cached end
    prefetch_margin: usize,
}

impl WindowedReader {
    pub fn new(store: Arc<CacheStore>, client_page_size: usize, prefetch_margin: usize) -> Self {
        Self {
            store,
            client_page_size,
            prefetch_margin,
        }
    }

    /// Returns client page `client_page` (1-based) for `category`.
    ///
    /// The result is `items[start..end]` clamped to what is available after
    /// at most one blocking provider fetch; it may be short or empty. Only a
    /// failure of that blocking fetch is returned as an error.
    pub async fn read_page(&self, category: &str, client_page: usize) -> Result<Vec<Item>> {
        let start = client_page
            .max(1)
            .saturating_sub(1)
            .saturating_mul(self.client_page_size);
        let end = start.saturating_add(self.client_page_size);

        let next_page = match self.store.get(category).await {
            Ok(entry) if start < entry.len() => {
                self.store.record_hit().await;
                if !entry.exhausted && end.saturating_add(self.prefetch_margin) >= entry.len() {
                    self.spawn_prefetch(category, entry.next_page());
                }
                return Ok(entry.window(start, end));
            }
            Ok(entry) => entry.next_page(),
            Err(_) => 1,
        };

        self.store.record_miss().await;
        debug!(
            "Cache miss for '{}' page {}: fetching provider page {}",
            category, client_page, next_page
        );
        self.store.fetch_and_merge(category, next_page).await?;

        Ok(self
            .store
            .get(category)
            .await
            .map(|entry| entry.window(start, end))
            .unwrap_or_default())
    }

    /// Fire-and-forget fetch of `page`. Errors are logged, never returned.
    fn spawn_prefetch(&self, category: &str, page: u32) {
        let store = Arc::clone(&self.store);
        let category = category.to_string();
        debug!("Prefetching provider page {} for '{}'", page, category);

        tokio::spawn(async move {
            if let Err(err) = store.fetch_and_merge(&category, page).await {
                warn!("Prefetch of page {} for '{}' failed: {}", page, category, err);
            }
        });
    }
}
