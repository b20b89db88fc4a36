//! API Handlers
//!
//! HTTP request handlers for each image cache endpoint.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use tracing::debug;

use crate::cache::CacheStore;
use crate::config::Config;
use crate::error::{ImageCacheError, Result};
use crate::models::{HealthResponse, ImagesQuery, Item, SortedImagesQuery, StatsResponse};
use crate::provider::{ImageProvider, PixabayClient, ProviderError};
use crate::reader::{SortedReader, WindowedReader};

/// Application state shared across all handlers.
///
/// The cache store is owned here and shared with both readers.
#[derive(Clone)]
pub struct AppState {
    /// Shared cache store
    pub store: Arc<CacheStore>,
    /// Fetch-order page reader
    pub windowed: WindowedReader,
    /// Sorted first-page reader
    pub sorted: SortedReader,
}

impl AppState {
    /// Creates a new AppState backed by the given provider.
    pub fn with_provider(provider: Arc<dyn ImageProvider>, config: &Config) -> Self {
        let store = Arc::new(CacheStore::new(
            provider,
            config.provider_page_size as usize,
        ));
        Self {
            windowed: WindowedReader::new(
                store.clone(),
                config.client_page_size,
                config.prefetch_margin,
            ),
            sorted: SortedReader::new(store.clone(), config.client_page_size),
            store,
        }
    }

    /// Creates a new AppState talking to Pixabay.
    pub fn from_config(config: &Config) -> std::result::Result<Self, ProviderError> {
        let client = PixabayClient::new(
            config.api_key.clone(),
            config.provider_base_url.clone(),
            config.provider_page_size,
        )?;
        Ok(Self::with_provider(Arc::new(client), config))
    }
}

/// Handler for GET /images
///
/// Returns one client page of a category's images in provider order.
pub async fn images_handler(
    State(state): State<AppState>,
    Query(query): Query<ImagesQuery>,
) -> Result<Json<Vec<Item>>> {
    if let Some(error_msg) = query.validate() {
        return Err(ImageCacheError::InvalidRequest(error_msg));
    }
    let category = query.category.as_deref().unwrap_or_default();
    let page = query.client_page();
    debug!("GET /images category='{}' page={}", category, page);

    let items = state.windowed.read_page(category, page).await?;
    Ok(Json(items))
}

/// Handler for GET /images/sorted
///
/// Returns the first client page of a category sorted by `sortBy`.
pub async fn sorted_images_handler(
    State(state): State<AppState>,
    Query(query): Query<SortedImagesQuery>,
) -> Result<Json<Vec<Item>>> {
    if let Some(error_msg) = query.validate() {
        return Err(ImageCacheError::InvalidRequest(error_msg));
    }
    let category = query.category.as_deref().unwrap_or_default();
    let key = query.sort_key();
    debug!("GET /images/sorted category='{}' key={:?}", category, key);

    let items = state.sorted.read_sorted(category, key).await?;
    Ok(Json(items))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.store.stats().await;
    Json(StatsResponse::new(&stats))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
