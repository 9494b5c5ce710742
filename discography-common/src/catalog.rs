//! Catalog fetchers
//!
//! The album list and album detail fetches sit between the backend and
//! the pages. Backend failures stop here: callers get an explicit outcome
//! (`AlbumListing`, `AlbumLookup`) and decide how to present it, and every
//! failure is logged once at this boundary.

use crate::backend::{BackendClient, Order, Query};
use crate::duration::{format_duration, total_duration_ms};
use crate::models::{Album, Track};
use crate::{Error, Result};
use async_trait::async_trait;
use tracing::{debug, error, warn};

const ALBUM_TABLE: &str = "Album";
const TRACK_TABLE: &str = "Track";
const ALBUM_ID_COLUMN: &str = "AlbumId";
const TITLE_COLUMN: &str = "Title";
const TRACK_ID_COLUMN: &str = "TrackId";

/// Read-only source of catalog rows
///
/// Implemented by [`BackendClient`]; tests substitute an in-memory source.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Every album, ascending by title
    async fn list_albums(&self) -> Result<Vec<Album>>;

    /// The album with `album_id`, if any
    async fn find_album(&self, album_id: i64) -> Result<Option<Album>>;

    /// Tracks of `album_id`, ascending by track id
    async fn list_tracks(&self, album_id: i64) -> Result<Vec<Track>>;
}

#[async_trait]
impl CatalogSource for BackendClient {
    async fn list_albums(&self) -> Result<Vec<Album>> {
        let query = Query::from(ALBUM_TABLE).order(TITLE_COLUMN, Order::Ascending);
        self.select(&query).await
    }

    async fn find_album(&self, album_id: i64) -> Result<Option<Album>> {
        let query = Query::from(ALBUM_TABLE).eq(ALBUM_ID_COLUMN, album_id).single();
        self.select_single(&query).await
    }

    async fn list_tracks(&self, album_id: i64) -> Result<Vec<Track>> {
        let query = Query::from(TRACK_TABLE)
            .eq(ALBUM_ID_COLUMN, album_id)
            .order(TRACK_ID_COLUMN, Order::Ascending);
        self.select(&query).await
    }
}

/// Outcome of the album list fetch
#[derive(Debug)]
pub enum AlbumListing {
    /// No backend client was configured
    Unconfigured,
    /// Albums ordered by title; may be empty
    Loaded(Vec<Album>),
    /// The backend query failed
    Failed(Error),
}

impl AlbumListing {
    /// Albums to show, empty for every non-loaded outcome
    pub fn albums(&self) -> &[Album] {
        match self {
            AlbumListing::Loaded(albums) => albums,
            _ => &[],
        }
    }

    pub fn is_configured(&self) -> bool {
        !matches!(self, AlbumListing::Unconfigured)
    }
}

/// Fetch every album ordered by title.
///
/// Never retried. A failure is logged and returned as
/// [`AlbumListing::Failed`].
pub async fn fetch_albums(source: Option<&dyn CatalogSource>) -> AlbumListing {
    let Some(source) = source else {
        debug!("Album list requested without a backend");
        return AlbumListing::Unconfigured;
    };

    match source.list_albums().await {
        Ok(albums) => {
            debug!(count = albums.len(), "Fetched albums");
            AlbumListing::Loaded(albums)
        }
        Err(e) => {
            error!("Error fetching albums: {}", e);
            AlbumListing::Failed(e)
        }
    }
}

/// One album with its ordered tracklist
#[derive(Debug)]
pub struct AlbumDetail {
    pub album: Album,
    /// Ascending by track id; empty when the track query failed
    pub tracks: Vec<Track>,
    /// Why the tracklist is empty despite the album existing, if it failed
    pub track_error: Option<Error>,
}

impl AlbumDetail {
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    pub fn total_duration_ms(&self) -> u64 {
        total_duration_ms(&self.tracks)
    }

    /// Aggregate duration as `M:SS`
    pub fn total_duration(&self) -> String {
        format_duration(self.total_duration_ms())
    }

    /// True when the tracklist was masked because its query failed
    pub fn tracks_degraded(&self) -> bool {
        self.track_error.is_some()
    }
}

/// Why an album detail lookup produced nothing to show
#[derive(Debug)]
pub enum NotFoundReason {
    /// No backend client was configured
    Unconfigured,
    /// The identifier is not an integer
    InvalidId(String),
    /// The backend has no album with this identifier
    NoSuchAlbum(i64),
    /// The album query itself failed
    AlbumQueryFailed(Error),
}

/// Outcome of the album detail fetch
#[derive(Debug)]
pub enum AlbumLookup {
    Found(AlbumDetail),
    NotFound(NotFoundReason),
}

impl AlbumLookup {
    pub fn found(self) -> Option<AlbumDetail> {
        match self {
            AlbumLookup::Found(detail) => Some(detail),
            AlbumLookup::NotFound(_) => None,
        }
    }
}

/// Parse a navigation path segment as an album identifier
pub fn parse_album_id(raw: &str) -> Result<i64> {
    raw.parse::<i64>()
        .map_err(|_| Error::InvalidInput(format!("Album id is not an integer: {:?}", raw)))
}

/// Fetch one album and its tracks.
///
/// The album and track queries run concurrently and both are awaited
/// before the result is built. A missing or failed album is "not found"
/// whatever happened to the tracks; a failed track query leaves the album
/// with an empty tracklist and the cause in [`AlbumDetail::track_error`].
pub async fn fetch_album_detail(source: Option<&dyn CatalogSource>, raw_id: &str) -> AlbumLookup {
    let album_id = match parse_album_id(raw_id) {
        Ok(id) => id,
        Err(_) => {
            debug!(raw_id, "Rejected album id");
            return AlbumLookup::NotFound(NotFoundReason::InvalidId(raw_id.to_string()));
        }
    };

    let Some(source) = source else {
        debug!(album_id, "Album detail requested without a backend");
        return AlbumLookup::NotFound(NotFoundReason::Unconfigured);
    };

    let (album_result, tracks_result) =
        tokio::join!(source.find_album(album_id), source.list_tracks(album_id));

    let album = match album_result {
        Ok(Some(album)) => album,
        Ok(None) => {
            debug!(album_id, "No such album");
            return AlbumLookup::NotFound(NotFoundReason::NoSuchAlbum(album_id));
        }
        Err(e) => {
            error!(album_id, "Error fetching album: {}", e);
            return AlbumLookup::NotFound(NotFoundReason::AlbumQueryFailed(e));
        }
    };

    let (tracks, track_error) = match tracks_result {
        Ok(tracks) => (tracks, None),
        Err(e) => {
            warn!(album_id, "Error fetching tracks: {}", e);
            (Vec::new(), Some(e))
        }
    };

    AlbumLookup::Found(AlbumDetail {
        album,
        tracks,
        track_error,
    })
}
