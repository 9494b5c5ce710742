//! Track duration formatting
//!
//! Durations arrive from the backend as whole milliseconds and are shown as
//! `M:SS`: minutes unpadded and unbounded, seconds zero-padded to two
//! digits. Sub-second remainders are truncated, never rounded, so a sum of
//! track durations and the individual tracks are formatted consistently.

use crate::models::Track;

const MILLIS_PER_SECOND: u64 = 1000;
const SECONDS_PER_MINUTE: u64 = 60;

/// Format milliseconds as `minutes:seconds`.
///
/// # Examples
///
/// ```
/// use discography_common::duration::format_duration;
///
/// assert_eq!(format_duration(185_000), "3:05");
/// assert_eq!(format_duration(4_000), "0:04");
/// assert_eq!(format_duration(3_600_000), "60:00");
/// ```
pub fn format_duration(ms: u64) -> String {
    let total_seconds = ms / MILLIS_PER_SECOND;
    let minutes = total_seconds / SECONDS_PER_MINUTE;
    let seconds = total_seconds % SECONDS_PER_MINUTE;
    format!("{}:{:02}", minutes, seconds)
}

/// Sum of all track durations in milliseconds
pub fn total_duration_ms(tracks: &[Track]) -> u64 {
    tracks.iter().map(|t| t.milliseconds).sum()
}
