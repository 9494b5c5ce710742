//! Catalog row models
//!
//! Field names follow the backend's column names (`AlbumId`, `Title`, ...).

use serde::{Deserialize, Serialize};

/// External image host used for deterministic cover art
pub const COVER_ART_HOST: &str = "https://picsum.photos";

/// Cover art edge length on the collection grid
pub const GRID_COVER_SIZE: u32 = 400;

/// Cover art edge length on the album detail page
pub const DETAIL_COVER_SIZE: u32 = 600;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Album {
    pub album_id: i64,
    pub title: String,
    pub artist_id: i64,
}

impl Album {
    /// Navigation path of this album's detail page
    pub fn detail_path(&self) -> String {
        format!("/albums/{}", self.album_id)
    }

    /// Cover art reference seeded by the album identifier
    ///
    /// Never stored and never fetched here; the same id always yields the
    /// same image.
    pub fn cover_art_url(&self, size: u32) -> String {
        cover_art_url(self.album_id, size, size)
    }
}

/// Build a seeded image reference for `album_id` at `width`×`height` pixels
pub fn cover_art_url(album_id: i64, width: u32, height: u32) -> String {
    format!("{}/seed/{}/{}/{}", COVER_ART_HOST, album_id, width, height)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Track {
    pub track_id: i64,
    pub name: String,
    pub album_id: i64,
    pub composer: Option<String>,
    pub milliseconds: u64,
    /// Carried for completeness; no view renders it
    pub unit_price: f64,
}

impl Track {
    /// Composer for display, `N/A` when the backend has none
    pub fn composer_or_default(&self) -> &str {
        match self.composer.as_deref() {
            Some(c) if !c.is_empty() => c,
            _ => "N/A",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_album_decodes_backend_columns() {
        let album: Album = serde_json::from_value(json!({
            "AlbumId": 4,
            "Title": "Let There Be Rock",
            "ArtistId": 1
        }))
        .unwrap();

        assert_eq!(album.album_id, 4);
        assert_eq!(album.title, "Let There Be Rock");
        assert_eq!(album.artist_id, 1);
    }

    #[test]
    fn test_track_null_composer() {
        let track: Track = serde_json::from_value(json!({
            "TrackId": 2,
            "Name": "Balls to the Wall",
            "AlbumId": 2,
            "Composer": null,
            "Milliseconds": 342562,
            "UnitPrice": 0.99
        }))
        .unwrap();

        assert_eq!(track.composer, None);
        assert_eq!(track.composer_or_default(), "N/A");
    }

    #[test]
    fn test_empty_composer_falls_back() {
        let track = Track {
            track_id: 1,
            name: "Intro".to_string(),
            album_id: 1,
            composer: Some(String::new()),
            milliseconds: 0,
            unit_price: 0.99,
        };
        assert_eq!(track.composer_or_default(), "N/A");
    }

    #[test]
    fn test_cover_art_is_seeded_by_id() {
        let album = Album {
            album_id: 42,
            title: "Facelift".to_string(),
            artist_id: 5,
        };

        assert_eq!(
            album.cover_art_url(GRID_COVER_SIZE),
            "https://picsum.photos/seed/42/400/400"
        );
        assert_eq!(album.cover_art_url(DETAIL_COVER_SIZE), cover_art_url(42, 600, 600));
        assert_eq!(album.detail_path(), "/albums/42");
    }
}
