//! API Routes
//!
//! Configures the Axum router with all image cache endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    health_handler, images_handler, sorted_images_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /images` - One client page in provider order
/// - `GET /images/sorted` - First client page sorted by id or views
/// - `GET /stats` - Get cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/images", get(images_handler))
        .route("/images/sorted", get(sorted_images_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::config::Config;
    use crate::provider::fake::FakeProvider;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let provider = Arc::new(FakeProvider::sequential(200, 50));
        create_router(AppState::with_provider(provider, &Config::default()))
    }

    async fn get_status(uri: &str) -> StatusCode {
        create_test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        assert_eq!(get_status("/health").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_stats_endpoint() {
        assert_eq!(get_status("/stats").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_images_endpoint() {
        assert_eq!(get_status("/images?category=cats&page=1").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_sorted_endpoint() {
        assert_eq!(
            get_status("/images/sorted?category=cats&sortBy=views").await,
            StatusCode::OK
        );
    }

    #[tokio::test]
    async fn test_images_without_category() {
        assert_eq!(get_status("/images").await, StatusCode::BAD_REQUEST);
    }
}
