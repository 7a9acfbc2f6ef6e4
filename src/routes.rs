//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`          - Landing page
//! - `GET  /health`    - Health check
//! - `/api/*`          - Shortener API
//! - `/public/*`       - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Locations of the static assets served next to the API.
#[derive(Debug, Clone)]
pub struct StaticAssets {
    pub dir: String,
    pub index_file: String,
}

/// Builds the router without path normalization.
pub fn router(state: AppState, assets: &StaticAssets) -> Router {
    Router::new()
        .route_service("/", ServeFile::new(&assets.index_file))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .nest_service("/public", ServeDir::new(&assets.dir))
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState, assets: &StaticAssets) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, assets))
}
