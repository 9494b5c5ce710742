//! Album detail page

use discography_common::catalog::AlbumDetail;
use discography_common::duration::format_duration;
use discography_common::models::{Track, DETAIL_COVER_SIZE};

use super::escape_html;
use super::layout::render_page;

/// Render the detail page for one album
pub fn render_album_page(detail: &AlbumDetail) -> String {
    let album = &detail.album;
    let title = escape_html(&album.title);

    let body = format!(
        r#"<p><a href="/">&larr; Back to Albums</a></p>
<div class="detail">
    <section class="album-card">
        <img src="{cover}" alt="Cover art for {title}" width="{size}" height="{size}">
        <h1>{title}</h1>
        <div class="stats">
            <div><strong id="track-count">{track_count}</strong><div class="muted">Tracks</div></div>
            <div><strong id="total-duration">{total_duration}</strong><div class="muted">Duration</div></div>
        </div>
    </section>
    <section>
        <h2>Tracklist</h2>
        <table>
            <thead>
                <tr><th class="num">#</th><th>Title</th><th class="composer">Composer</th><th class="duration">Duration</th></tr>
            </thead>
            <tbody>
{rows}            </tbody>
        </table>
    </section>
</div>"#,
        cover = album.cover_art_url(DETAIL_COVER_SIZE),
        title = title,
        size = DETAIL_COVER_SIZE,
        track_count = detail.track_count(),
        total_duration = detail.total_duration(),
        rows = render_track_rows(&detail.tracks),
    );

    render_page(&body)
}

fn render_track_rows(tracks: &[Track]) -> String {
    if tracks.is_empty() {
        return "                <tr class=\"no-tracks\"><td colspan=\"4\">No tracks found for this album.</td></tr>\n"
            .to_string();
    }

    tracks
        .iter()
        .enumerate()
        .map(|(index, track)| {
            format!(
                "                <tr class=\"track\"><td class=\"num muted\">{}</td><td>{}</td><td class=\"composer muted\">{}</td><td class=\"duration muted\">{}</td></tr>\n",
                index + 1,
                escape_html(&track.name),
                escape_html(track.composer_or_default()),
                format_duration(track.milliseconds),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use discography_common::models::Album;

    fn detail(tracks: Vec<Track>) -> AlbumDetail {
        AlbumDetail {
            album: Album {
                album_id: 7,
                title: "Facelift".to_string(),
                artist_id: 5,
            },
            tracks,
            track_error: None,
        }
    }

    fn track(id: i64, name: &str, composer: Option<&str>, ms: u64) -> Track {
        Track {
            track_id: id,
            name: name.to_string(),
            album_id: 7,
            composer: composer.map(str::to_string),
            milliseconds: ms,
            unit_price: 0.99,
        }
    }

    #[test]
    fn test_detail_page_with_tracks() {
        let html = render_album_page(&detail(vec![
            track(51, "We Die Young", Some("Jerry Cantrell"), 185_000),
            track(52, "Man In The Box", None, 4_000),
        ]));

        assert!(html.contains("<h1>Facelift</h1>"));
        assert!(html.contains("https://picsum.photos/seed/7/600/600"));
        assert!(html.contains(r#"<strong id="track-count">2</strong>"#));
        assert!(html.contains(r#"<strong id="total-duration">3:09</strong>"#));
        assert!(html.contains(r#"<td class="num muted">1</td><td>We Die Young</td><td class="composer muted">Jerry Cantrell</td><td class="duration muted">3:05</td>"#));
        assert!(html.contains(r#"<td class="num muted">2</td><td>Man In The Box</td><td class="composer muted">N/A</td><td class="duration muted">0:04</td>"#));
        assert!(!html.contains("No tracks found"));
        assert!(html.contains("Back to Albums"));
    }

    #[test]
    fn test_detail_page_without_tracks() {
        let html = render_album_page(&detail(vec![]));
        assert!(html.contains("No tracks found for this album."));
        assert!(html.contains(r#"<strong id="track-count">0</strong>"#));
        assert!(html.contains(r#"<strong id="total-duration">0:00</strong>"#));
        assert_eq!(html.matches(r#"<tr class="track">"#).count(), 0);
    }

    #[test]
    fn test_positions_follow_given_order() {
        let html = render_album_page(&detail(vec![
            track(90, "First", None, 1_000),
            track(95, "Second", None, 1_000),
            track(99, "Third", None, 1_000),
        ]));
        let first = html.find("<td>First</td>").unwrap();
        let third = html.find("<td>Third</td>").unwrap();
        assert!(first < third);
        assert!(html.contains(r#"<td class="num muted">3</td><td>Third</td>"#));
    }

    #[test]
    fn test_track_names_escaped() {
        let html = render_album_page(&detail(vec![track(1, "A & B <live>", Some("C & D"), 0)]));
        assert!(html.contains("<td>A &amp; B &lt;live&gt;</td>"));
        assert!(html.contains("C &amp; D"));
    }
}
