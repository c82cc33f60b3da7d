//! Decoders for RRYS upstream payloads
//!
//! This module contains one decoder per upstream representation:
//! - `search`: search API JSON
//! - `status`: prefixed status JSON
//! - `series`: series content page HTML
//! - `feed`: episode RSS feed XML
//! - `episodes`: season/episode codes in feed entry titles

pub mod episodes;
pub mod feed;
pub mod search;
pub mod series;
pub mod status;

// Re-export main parsing functions
pub use episodes::{parse_episode_code, UNRESOLVED};
pub use feed::parse_feed;
pub use search::{full_size_poster, parse_search_results};
pub use series::{extract_bracketed_title, parse_series_page, select_attr, select_text, PageFields};
pub use status::{parse_play_status, STATUS_PREFIX, STATUS_UNAVAILABLE};
