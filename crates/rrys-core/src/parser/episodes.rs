//! Season/episode code extraction for feed entry titles.

use std::sync::LazyLock;

use regex_lite::Regex;

/// Value used for a season or episode number that cannot be resolved.
pub const UNRESOLVED: i32 = -1;

static EPISODE_CODE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)S(\d{1,3})E(\d{1,3})").ok());

/// Parse the first `SxxEyy` code (case-insensitive, 1-3 digits each) found in
/// a release title.
///
/// Returns `(season, episode)`. Both values are [`UNRESOLVED`] when the title
/// carries no code; a pair is never half-resolved.
///
/// # Examples
/// ```
/// use rrys_core::parser::parse_episode_code;
///
/// assert_eq!(parse_episode_code("Raised.by.Wolves.2020.S01E03.WEBrip.mp4"), (1, 3));
/// assert_eq!(parse_episode_code("s2e10"), (2, 10));
/// assert_eq!(parse_episode_code("no code here"), (-1, -1));
/// ```
pub fn parse_episode_code(title: &str) -> (i32, i32) {
    let Some(re) = EPISODE_CODE.as_ref() else {
        return (UNRESOLVED, UNRESOLVED);
    };
    let Some(caps) = re.captures(title) else {
        return (UNRESOLVED, UNRESOLVED);
    };

    let season = caps.get(1).and_then(|m| m.as_str().parse::<i32>().ok());
    let episode = caps.get(2).and_then(|m| m.as_str().parse::<i32>().ok());

    match (season, episode) {
        (Some(season), Some(episode)) => (season, episode),
        _ => (UNRESOLVED, UNRESOLVED),
    }
}
