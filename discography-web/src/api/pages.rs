//! HTML page handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use discography_common::catalog::{fetch_album_detail, fetch_albums, AlbumLookup};
use tracing::debug;

use super::{search_term, QueryPairs};
use crate::render;
use crate::AppState;

/// GET /
///
/// Album collection; `?q=` pre-applies the title filter.
pub async fn collection_page(
    State(state): State<AppState>,
    Query(params): Query<QueryPairs>,
) -> Html<String> {
    let listing = fetch_albums(state.catalog()).await;
    Html(render::render_collection_page(&listing, &search_term(&params)))
}

/// GET /albums/:album_id
///
/// Malformed and unknown identifiers both get the standard 404 page.
pub async fn album_page(State(state): State<AppState>, Path(album_id): Path<String>) -> Response {
    match fetch_album_detail(state.catalog(), &album_id).await {
        AlbumLookup::Found(detail) => Html(render::render_album_page(&detail)).into_response(),
        AlbumLookup::NotFound(reason) => {
            debug!(album_id = %album_id, ?reason, "Album page not found");
            not_found_page().await
        }
    }
}

/// Fallback for every unknown path
pub async fn not_found_page() -> Response {
    (StatusCode::NOT_FOUND, Html(render::render_not_found_page())).into_response()
}
