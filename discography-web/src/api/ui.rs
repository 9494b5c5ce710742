//! Static script serving

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

const ALBUM_FILTER_JS: &str = include_str!("../../ui/album-filter.js");

/// GET /static/album-filter.js
///
/// Browser-side live filter for the collection page
pub async fn serve_filter_js() -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/javascript")],
        ALBUM_FILTER_JS,
    )
        .into_response()
}
