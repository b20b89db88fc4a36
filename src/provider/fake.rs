//! In-process provider used by unit tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use super::{ImageProvider, ProviderError, Result};
use crate::models::Item;

/// Serves a fixed catalog in pages and records every call.
pub struct FakeProvider {
    catalog: Vec<Item>,
    page_size: usize,
    delay: Duration,
    failing: AtomicBool,
    calls: AtomicUsize,
    requested: Mutex<Vec<(String, u32)>>,
}

impl FakeProvider {
    /// `total` items with ids `1..=total` and scattered view counts.
    pub fn sequential(total: usize, page_size: usize) -> Self {
        let catalog = (0..total as u64)
            .map(|i| Item::new(i + 1, (i * 37) % 101))
            .collect();
        Self::with_items(catalog, page_size)
    }

    pub fn with_items(catalog: Vec<Item>, page_size: usize) -> Self {
        Self {
            catalog,
            page_size,
            delay: Duration::ZERO,
            failing: AtomicBool::new(false),
            calls: AtomicUsize::new(0),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requested_pages(&self, category: &str) -> Vec<u32> {
        self.requested
            .lock()
            .unwrap()
            .iter()
            .filter(|(c, _)| c == category)
            .map(|(_, p)| *p)
            .collect()
    }
}

#[async_trait]
impl ImageProvider for FakeProvider {
    async fn fetch_page(&self, category: &str, page: u32) -> Result<Vec<Item>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested
            .lock()
            .unwrap()
            .push((category.to_string(), page));

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(ProviderError::RequestFailed("provider unavailable".into()));
        }

        let start = (page as usize - 1) * self.page_size;
        let end = (start + self.page_size).min(self.catalog.len());
        Ok(self.catalog.get(start..end).map(<[Item]>::to_vec).unwrap_or_default())
    }
}
