//! Cache Store Module
//!
//! Owns every category entry and is the only place provider pages are
//! merged into the cache.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info};

use crate::cache::{CacheStats, CategoryEntry};
use crate::error::{ImageCacheError, Result};
use crate::provider::ImageProvider;

#[derive(Debug, Default)]
struct StoreInner {
    entries: HashMap<String, CategoryEntry>,
    stats: CacheStats,
}

// == Cache Store ==
/// Category-keyed store of accumulated provider pages.
///
/// Category keys are matched exactly (case-sensitive, no trimming). At most
/// one provider fetch is in flight per category: callers queue on a
/// per-category guard and re-check coverage once they hold it, so a page is
/// never fetched or appended twice.
pub struct CacheStore {
    inner: RwLock<StoreInner>,
    /// Per-category fetch guards
    in_flight: Mutex<HashMap<String, Arc<Mutex<()>>>>,
    provider: Arc<dyn ImageProvider>,
    /// A fetched page shorter than this marks the category exhausted
    provider_page_size: usize,
}

impl CacheStore {
    // == Constructor ==
    pub fn new(provider: Arc<dyn ImageProvider>, provider_page_size: usize) -> Self {
        Self {
            inner: RwLock::new(StoreInner::default()),
            in_flight: Mutex::new(HashMap::new()),
            provider,
            provider_page_size,
        }
    }

    // == Get ==
    /// Returns a snapshot of the category's entry.
    pub async fn get(&self, category: &str) -> Result<CategoryEntry> {
        self.inner
            .read()
            .await
            .entries
            .get(category)
            .cloned()
            .ok_or_else(|| ImageCacheError::NotFound(category.to_string()))
    }

    // == Insert ==
    /// Stores an entry, replacing any existing one wholesale.
    ///
    /// Bypasses the fetch guard; intended for seeding and maintenance.
    pub async fn insert(&self, category: impl Into<String>, entry: CategoryEntry) {
        let mut inner = self.inner.write().await;
        inner.entries.insert(category.into(), entry);
    }

    // == Evict ==
    /// Removes a single category.
    pub async fn evict(&self, category: &str) -> Result<()> {
        let mut inner = self.inner.write().await;
        if inner.entries.remove(category).is_some() {
            inner.stats.record_evictions(1);
            Ok(())
        } else {
            Err(ImageCacheError::NotFound(category.to_string()))
        }
    }

    // == Fetch And Merge ==
    /// Fetches provider `page` for `category` and appends it to the entry.
    ///
    /// Only the page directly after the last merged one is accepted (page 1
    /// for an absent entry). Requests for a page that is already merged, or
    /// for a category the provider has no more pages for, return `Ok` without
    /// calling the provider. So do requests that would leave a gap, which is
    /// what a prefetch looks like after its entry was evicted.
    ///
    /// On provider failure nothing is merged and `FetchFailed` is returned.
    pub async fn fetch_and_merge(&self, category: &str, page: u32) -> Result<()> {
        let guard = self.fetch_guard(category).await;
        let _held = guard.lock().await;

        let expected = {
            let inner = self.inner.read().await;
            match inner.entries.get(category) {
                Some(entry) if entry.exhausted => None,
                Some(entry) => Some(entry.next_page()),
                None => Some(1),
            }
        };

        match expected {
            Some(next) if next == page => {}
            Some(next) if page > next => {
                debug!(
                    "Skipping page {} for '{}': next mergeable page is {}",
                    page, category, next
                );
                self.inner.write().await.stats.record_coalesced();
                return Ok(());
            }
            _ => {
                debug!("Page {} for '{}' already covered", page, category);
                self.inner.write().await.stats.record_coalesced();
                return Ok(());
            }
        }

        self.inner.write().await.stats.record_provider_fetch();
        let items = self.provider.fetch_page(category, page).await?;
        let fetched = items.len();
        let exhausted = fetched < self.provider_page_size;

        let mut inner = self.inner.write().await;
        match inner.entries.get_mut(category) {
            Some(entry) if entry.next_page() == page => {
                entry.append(items, page);
                entry.exhausted = exhausted;
            }
            None if page == 1 => {
                let mut entry = CategoryEntry::new(items, page);
                entry.exhausted = exhausted;
                inner.entries.insert(category.to_string(), entry);
            }
            _ => {
                // Evicted while the provider call was outstanding.
                debug!(
                    "Discarding page {} for '{}': entry changed during fetch",
                    page, category
                );
                return Ok(());
            }
        }

        debug!(
            "Merged page {} for '{}' ({} items{})",
            page,
            category,
            fetched,
            if exhausted { ", last page" } else { "" }
        );
        Ok(())
    }

    async fn fetch_guard(&self, category: &str) -> Arc<Mutex<()>> {
        let mut in_flight = self.in_flight.lock().await;
        Arc::clone(
            in_flight
                .entry(category.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(()))),
        )
    }

    // == Evict Stale ==
    /// Removes every entry whose last merge is older than `expiration`.
    ///
    /// Does not wait for in-flight fetches; see `fetch_and_merge` for how a
    /// fetch that outlives its entry is resolved. Returns the number of
    /// entries removed.
    pub async fn evict_stale(&self, now_ms: u64, expiration: Duration) -> usize {
        let expiration_ms = expiration.as_millis() as u64;

        let removed = {
            let mut inner = self.inner.write().await;
            let before = inner.entries.len();
            inner.entries.retain(|category, entry| {
                let stale = entry.is_stale(now_ms, expiration_ms);
                if stale {
                    info!("Cleared stale cache for category: {}", category);
                }
                !stale
            });
            let removed = before - inner.entries.len();
            inner.stats.record_evictions(removed);
            removed
        };

        // Guards only referenced by the map are idle.
        self.in_flight
            .lock()
            .await
            .retain(|_, guard| Arc::strong_count(guard) > 1);

        removed
    }

    // == Read Accounting ==
    pub async fn record_hit(&self) {
        self.inner.write().await.stats.record_hit();
    }

    pub async fn record_miss(&self) {
        self.inner.write().await.stats.record_miss();
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        let inner = self.inner.read().await;
        let mut stats = inner.stats.clone();
        stats.total_entries = inner.entries.len();
        stats.total_items = inner.entries.values().map(CategoryEntry::len).sum();
        stats
    }

    // == Length ==
    /// Returns the number of cached categories.
    pub async fn len(&self) -> usize {
        self.inner.read().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.entries.is_empty()
    }
}
