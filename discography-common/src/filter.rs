//! Album title filter
//!
//! Case-insensitive substring match over album titles. The result is a
//! subset selection in input order, never a re-sort.

use crate::models::Album;

/// Select the albums whose title contains `term`, ignoring case.
///
/// An empty term returns every album in input order.
///
/// # Examples
///
/// ```
/// use discography_common::filter::filter_albums;
/// use discography_common::models::Album;
///
/// let albums = vec![
///     Album { album_id: 1, title: "Beta".into(), artist_id: 1 },
///     Album { album_id: 2, title: "alpha".into(), artist_id: 1 },
/// ];
/// assert_eq!(filter_albums(&albums, "A").len(), 2);
/// assert!(filter_albums(&albums, "Z").is_empty());
/// ```
pub fn filter_albums<'a>(albums: &'a [Album], term: &str) -> Vec<&'a Album> {
    if term.is_empty() {
        return albums.iter().collect();
    }

    let needle = term.to_lowercase();
    albums
        .iter()
        .filter(|album| title_matches(&album.title, &needle))
        .collect()
}

/// `needle` must already be lowercased
fn title_matches(title: &str, needle: &str) -> bool {
    title.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn album(id: i64, title: &str) -> Album {
        Album {
            album_id: id,
            title: title.to_string(),
            artist_id: 1,
        }
    }

    fn ids(albums: &[&Album]) -> Vec<i64> {
        albums.iter().map(|a| a.album_id).collect()
    }

    #[test]
    fn test_empty_term_returns_everything_in_order() {
        let albums = vec![album(3, "Zeta"), album(1, "Alpha"), album(2, "Mid")];
        let result = filter_albums(&albums, "");
        assert_eq!(ids(&result), vec![3, 1, 2]);
    }

    #[test]
    fn test_case_insensitive_match_preserves_order() {
        let albums = vec![album(1, "Beta"), album(2, "alpha")];
        let result = filter_albums(&albums, "a");
        assert_eq!(ids(&result), vec![1, 2]);

        let result = filter_albums(&albums, "ALPH");
        assert_eq!(ids(&result), vec![2]);
    }

    #[test]
    fn test_no_match() {
        let albums = vec![album(1, "Beta"), album(2, "alpha")];
        assert!(filter_albums(&albums, "Z").is_empty());
    }

    #[test]
    fn test_whitespace_is_literal() {
        let albums = vec![album(1, "Big Ones"), album(2, "BigOnes")];
        assert_eq!(ids(&filter_albums(&albums, "g o")), vec![1]);
    }

    #[test]
    fn test_non_ascii_titles() {
        let albums = vec![album(1, "Música Clássica"), album(2, "Heavy")];
        assert_eq!(ids(&filter_albums(&albums, "MÚSICA")), vec![1]);
    }

    #[test]
    fn test_result_is_subsequence() {
        let albums: Vec<Album> = (0..50)
            .map(|i| album(i, if i % 3 == 0 { "Live At Donington" } else { "Studio" }))
            .collect();
        let result = filter_albums(&albums, "live");
        assert_eq!(result.len(), 17);
        assert!(result.windows(2).all(|w| w[0].album_id < w[1].album_id));
        assert!(result.iter().all(|a| a.title.to_lowercase().contains("live")));
    }
}
