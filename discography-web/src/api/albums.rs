//! Album JSON API
//!
//! Same fetchers as the HTML pages, but backend failures are reported with
//! a 503/504 status instead of a degraded page or a 404.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use discography_common::catalog::{
    fetch_album_detail, fetch_albums, AlbumListing, AlbumLookup, NotFoundReason,
};
use discography_common::duration::format_duration;
use discography_common::filter::filter_albums;
use discography_common::{Album, Track};
use serde::Serialize;

use super::{search_term, QueryPairs};
use crate::error::ApiError;
use crate::AppState;

/// Album list response
#[derive(Debug, Serialize)]
pub struct AlbumListResponse {
    /// False in unconfigured mode
    pub configured: bool,
    /// Filter text that was applied
    pub term: String,
    /// Albums before filtering
    pub total: usize,
    pub albums: Vec<Album>,
}

/// One tracklist row
#[derive(Debug, Serialize)]
pub struct TrackEntry {
    /// 1-based position in the tracklist
    pub position: usize,
    #[serde(flatten)]
    pub track: Track,
    /// `M:SS`
    pub duration: String,
}

/// Album detail response
#[derive(Debug, Serialize)]
pub struct AlbumDetailResponse {
    pub album: Album,
    pub cover_art_url: String,
    pub tracks: Vec<TrackEntry>,
    pub track_count: usize,
    pub total_duration_ms: u64,
    pub total_duration: String,
    /// True when the tracklist is empty because its query failed
    pub tracks_degraded: bool,
}

/// GET /api/albums?q=
pub async fn list_albums(
    State(state): State<AppState>,
    Query(params): Query<QueryPairs>,
) -> Result<Json<AlbumListResponse>, ApiError> {
    let term = search_term(&params);
    match fetch_albums(state.catalog()).await {
        AlbumListing::Unconfigured => Ok(Json(AlbumListResponse {
            configured: false,
            term,
            total: 0,
            albums: Vec::new(),
        })),
        AlbumListing::Loaded(albums) => {
            let filtered = filter_albums(&albums, &term)
                .into_iter()
                .cloned()
                .collect();
            Ok(Json(AlbumListResponse {
                configured: true,
                total: albums.len(),
                term,
                albums: filtered,
            }))
        }
        AlbumListing::Failed(e) => Err(e.into()),
    }
}

/// GET /api/albums/:album_id
pub async fn get_album(
    State(state): State<AppState>,
    Path(album_id): Path<String>,
) -> Result<Json<AlbumDetailResponse>, ApiError> {
    let detail = match fetch_album_detail(state.catalog(), &album_id).await {
        AlbumLookup::Found(detail) => detail,
        AlbumLookup::NotFound(NotFoundReason::AlbumQueryFailed(e)) => return Err(e.into()),
        AlbumLookup::NotFound(_) => {
            return Err(ApiError::NotFound(format!("Album {}", album_id)));
        }
    };

    let track_count = detail.track_count();
    let total_duration_ms = detail.total_duration_ms();
    let tracks_degraded = detail.tracks_degraded();
    let cover_art_url = detail
        .album
        .cover_art_url(discography_common::models::DETAIL_COVER_SIZE);

    let tracks = detail
        .tracks
        .into_iter()
        .enumerate()
        .map(|(index, track)| TrackEntry {
            position: index + 1,
            duration: format_duration(track.milliseconds),
            track,
        })
        .collect();

    Ok(Json(AlbumDetailResponse {
        album: detail.album,
        cover_art_url,
        tracks,
        track_count,
        total_duration_ms,
        total_duration: format_duration(total_duration_ms),
        tracks_degraded,
    }))
}
