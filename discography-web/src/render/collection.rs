//! Collection page: album grid with title filter, or a setup/failure notice
//!
//! Every album card is rendered; the ones outside the current filter carry
//! the `hidden` attribute so the browser-side filter can widen the
//! selection again without a round trip. Both sides apply the same rule:
//! case-insensitive substring match on the title, empty term shows all.

use std::ptr;

use discography_common::catalog::AlbumListing;
use discography_common::filter::filter_albums;
use discography_common::models::{Album, GRID_COVER_SIZE};

use super::escape_html;
use super::layout::render_page;

const INTRO: &str = r#"<div class="intro">
    <h1>Album Collection</h1>
    <p class="muted">Browse through the collection of albums. Click on an album to see its tracks. Use the search bar to filter by title.</p>
</div>"#;

/// What the collection page shows for a given listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionState {
    /// Album grid with filter
    Grid,
    /// Instructions for connecting a backend
    Setup,
    /// Backend configured but the album query failed
    Unavailable,
}

impl CollectionState {
    /// The grid only appears when configured and at least one album exists
    pub fn for_listing(listing: &AlbumListing) -> Self {
        match listing {
            AlbumListing::Loaded(albums) if !albums.is_empty() => CollectionState::Grid,
            AlbumListing::Loaded(_) | AlbumListing::Unconfigured => CollectionState::Setup,
            AlbumListing::Failed(_) => CollectionState::Unavailable,
        }
    }
}

/// Render the full collection page for `listing` filtered by `term`
pub fn render_collection_page(listing: &AlbumListing, term: &str) -> String {
    let content = match CollectionState::for_listing(listing) {
        CollectionState::Grid => render_album_grid(listing.albums(), term),
        CollectionState::Setup => render_setup_instructions(),
        CollectionState::Unavailable => render_unavailable_notice(),
    };
    render_page(&format!("{}\n{}", INTRO, content))
}

/// Search box, cards and the zero-result state
pub fn render_album_grid(albums: &[Album], term: &str) -> String {
    let visible = filter_albums(albums, term);
    let mut remaining = visible.iter().peekable();

    let mut cards = String::new();
    for album in albums {
        // `visible` is an order-preserving subsequence of `albums`
        let shown = match remaining.peek() {
            Some(next) if ptr::eq(**next, album) => {
                remaining.next();
                true
            }
            _ => false,
        };
        cards.push_str(&render_album_card(album, shown));
    }

    let term_html = escape_html(term);
    format!(
        r#"<form class="search" method="get" action="/" role="search">
    <input type="search" id="album-search" name="q" value="{term}" placeholder="Search by album title..." autocomplete="off" aria-label="Search by album title">
</form>
<div class="album-grid" id="album-grid">
{cards}</div>
<div class="empty-state" id="no-results"{empty_hidden}>
    <h3>No Albums Found</h3>
    <p class="muted">Your search for "<span id="search-echo">{term}</span>" did not match any albums.</p>
</div>
<script src="/static/album-filter.js" defer></script>"#,
        term = term_html,
        cards = cards,
        empty_hidden = if visible.is_empty() { "" } else { " hidden" },
    )
}

fn render_album_card(album: &Album, shown: bool) -> String {
    let title = escape_html(&album.title);
    format!(
        r#"    <a class="album-card" href="{href}" data-title="{title}"{hidden}>
        <img src="{cover}" alt="Cover art for {title}" width="{size}" height="{size}" loading="lazy">
        <h2>{title}</h2>
    </a>
"#,
        href = album.detail_path(),
        title = title,
        hidden = if shown { "" } else { " hidden" },
        cover = album.cover_art_url(GRID_COVER_SIZE),
        size = GRID_COVER_SIZE,
    )
}

fn render_setup_instructions() -> String {
    r#"<div class="alert" id="setup-instructions">
    <h3>Connect to your catalog database</h3>
    <p>To connect your own hosted database, set the backend URL and access key in the environment (or in <code>config.toml</code>) before starting the server. Make sure the URL is valid.</p>
    <pre><code>DISCOGRAPHY_BACKEND_URL="https://your-project-ref.supabase.co"
DISCOGRAPHY_BACKEND_KEY="your-anon-key"</code></pre>
    <p>The <code>NEXT_PUBLIC_SUPABASE_URL</code> and <code>NEXT_PUBLIC_SUPABASE_ANON_KEY</code> names are accepted too.</p>
    <p>After setting them, restart the server for the changes to take effect.</p>
</div>"#
        .to_string()
}

fn render_unavailable_notice() -> String {
    r#"<div class="alert" id="catalog-unavailable">
    <h3>Albums could not be loaded</h3>
    <p>The catalog database did not answer. Try again in a moment.</p>
</div>"#
        .to_string()
}
