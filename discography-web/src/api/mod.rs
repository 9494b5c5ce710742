//! HTTP handlers for discography-web

pub mod albums;
pub mod health;
pub mod pages;
pub mod ui;

pub use albums::{get_album, list_albums};
pub use health::health_routes;
pub use pages::{album_page, collection_page, not_found_page};
pub use ui::serve_filter_js;

/// Query parameters as raw pairs; decoding them never fails
pub type QueryPairs = Vec<(String, String)>;

/// `?q=` filter text shared by the collection page and the album list API
///
/// The first `q` wins; no `q` at all means an empty term.
pub fn search_term(params: &[(String, String)]) -> String {
    params
        .iter()
        .find(|(key, _)| key == "q")
        .map(|(_, value)| value.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> QueryPairs {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_search_term_first_q_wins() {
        assert_eq!(search_term(&pairs(&[("q", "a"), ("q", "b")])), "a");
    }

    #[test]
    fn test_search_term_missing_or_unrelated() {
        assert_eq!(search_term(&[]), "");
        assert_eq!(search_term(&pairs(&[("page", "2"), ("Q", "x")])), "");
        assert_eq!(search_term(&pairs(&[("page", "2"), ("q", "")])), "");
    }
}
