//! Sorted Reader
//!
//! Returns the first client page of a category's accumulated items in a
//! requested order. Every call sorts a copy of all accumulated items, which
//! is O(n log n) in the category size; fine for the few hundred items a
//! category accumulates, but it does not scale to large categories.

use std::sync::Arc;

use crate::cache::CacheStore;
use crate::error::Result;
use crate::models::Item;

/// Ordering requested through the `sortBy` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Ascending by id
    Id,
    /// Descending by views
    Views,
    /// Accumulation order
    Unsorted,
}

impl SortKey {
    /// Parses a `sortBy` value. Unknown values keep accumulation order.
    pub fn from_param(value: &str) -> Self {
        match value {
            "id" => SortKey::Id,
            "views" => SortKey::Views,
            _ => SortKey::Unsorted,
        }
    }

    /// Stable in-place sort.
    pub fn sort(self, items: &mut [Item]) {
        match self {
            SortKey::Id => items.sort_by_key(|item| item.id),
            SortKey::Views => items.sort_by(|a, b| b.views.cmp(&a.views)),
            SortKey::Unsorted => {}
        }
    }
}

#[derive(Clone)]
pub struct SortedReader {
    store: Arc<CacheStore>,
    client_page_size: usize,
}

impl SortedReader {
    pub fn new(store: Arc<CacheStore>, client_page_size: usize) -> Self {
        Self {
            store,
            client_page_size,
        }
    }

    /// Sorts everything cached for `category` and returns the first page.
    ///
    /// Fetches provider page 1 first when nothing is cached yet. The cached
    /// order itself is left untouched.
    pub async fn read_sorted(&self, category: &str, key: SortKey) -> Result<Vec<Item>> {
        let needs_fetch = match self.store.get(category).await {
            Ok(entry) => entry.is_empty(),
            Err(_) => true,
        };
        if needs_fetch {
            self.store.fetch_and_merge(category, 1).await?;
        }

        let mut items = match self.store.get(category).await {
            Ok(entry) => entry.items.to_vec(),
            Err(_) => return Ok(Vec::new()),
        };
        key.sort(&mut items);
        items.truncate(self.client_page_size);
        Ok(items)
    }
}
