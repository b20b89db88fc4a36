//! Stale Sweep Task
//!
//! Background task that periodically evicts categories that have not been
//! fetched within the expiration window.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::{current_timestamp_ms, CacheStore};

/// Spawns a background task that periodically evicts stale categories.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between sweeps. It runs independently of request handling and does not
/// wait for in-flight fetches; an evicted category is simply fetched again
/// from page 1 on its next read.
///
/// # Arguments
/// * `store` - Shared cache store
/// * `cleanup_interval_secs` - Interval in seconds between sweeps
/// * `expiration_secs` - Age in seconds after which an entry is stale
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let sweeper = spawn_stale_sweeper(store.clone(), 300, 3600);
/// // Later, during shutdown:
/// sweeper.abort();
/// ```
pub fn spawn_stale_sweeper(
    store: Arc<CacheStore>,
    cleanup_interval_secs: u64,
    expiration_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs);
    let expiration = Duration::from_secs(expiration_secs);

    tokio::spawn(async move {
        info!(
            "Starting stale sweep task: interval {}s, expiration {}s",
            cleanup_interval_secs, expiration_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = store.evict_stale(current_timestamp_ms(), expiration).await;

            if removed > 0 {
                info!("Stale sweep: evicted {} categories", removed);
            } else {
                debug!("Stale sweep: no stale categories found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::cache::CategoryEntry;
    use crate::models::Item;
    use crate::provider::fake::FakeProvider;

    fn empty_store() -> Arc<CacheStore> {
        Arc::new(CacheStore::new(Arc::new(FakeProvider::sequential(0, 50)), 50))
    }

    fn entry_fetched_at(last_fetched_at: u64) -> CategoryEntry {
        let mut entry = CategoryEntry::new(vec![Item::new(1, 1)], 1);
        entry.last_fetched_at = last_fetched_at;
        entry
    }

    #[tokio::test]
    async fn test_sweeper_evicts_stale_entries() {
        let store = empty_store();
        let two_hours_ago = current_timestamp_ms() - 2 * 3_600_000;
        store.insert("stale", entry_fetched_at(two_hours_ago)).await;

        let handle = spawn_stale_sweeper(store.clone(), 1, 3600);

        // Wait for one sweep to run
        tokio::time::sleep(Duration::from_millis(1500)).await;

        assert!(store.get("stale").await.is_err(), "Stale entry should be evicted");
        handle.abort();
    }

    #[tokio::test]
    async fn test_sweeper_preserves_fresh_entries() {
        let store = empty_store();
        store
            .insert("fresh", entry_fetched_at(current_timestamp_ms()))
            .await;

        let handle = spawn_stale_sweeper(store.clone(), 1, 3600);
        tokio::time::sleep(Duration::from_millis(1500)).await;

        assert!(store.get("fresh").await.is_ok(), "Fresh entry should be kept");
        handle.abort();
    }

    #[tokio::test]
    async fn test_sweeper_can_be_aborted() {
        let handle = spawn_stale_sweeper(empty_store(), 1, 3600);

        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
