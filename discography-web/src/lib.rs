//! discography-web library - album catalog browser
//!
//! Server-rendered HTML pages plus a small JSON API over the catalog
//! fetchers in `discography-common`.

use std::sync::Arc;

use axum::Router;
use discography_common::{BackendClient, CatalogSource};
use tower_http::trace::TraceLayer;

pub mod api;
pub mod error;
pub mod render;

/// Application state shared across HTTP handlers
///
/// The catalog source is built once at startup and only read afterwards.
/// `None` means unconfigured mode.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Option<Arc<dyn CatalogSource>>,
}

impl AppState {
    /// Create new application state
    pub fn new(catalog: Option<Arc<dyn CatalogSource>>) -> Self {
        Self { catalog }
    }

    /// State backed by the hosted backend, or unconfigured when `client` is `None`
    pub fn from_client(client: Option<BackendClient>) -> Self {
        Self::new(client.map(|c| Arc::new(c) as Arc<dyn CatalogSource>))
    }

    /// State with no backend at all
    pub fn unconfigured() -> Self {
        Self::new(None)
    }

    pub fn catalog(&self) -> Option<&dyn CatalogSource> {
        self.catalog.as_deref()
    }

    pub fn is_configured(&self) -> bool {
        self.catalog.is_some()
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    // HTML pages
    let pages = Router::new()
        .route("/", get(api::collection_page))
        .route("/albums/:album_id", get(api::album_page))
        .route("/static/album-filter.js", get(api::serve_filter_js));

    // JSON API
    let json = Router::new()
        .route("/api/albums", get(api::list_albums))
        .route("/api/albums/:album_id", get(api::get_album))
        .merge(api::health_routes());

    Router::new()
        .merge(pages)
        .merge(json)
        .fallback(api::not_found_page)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
