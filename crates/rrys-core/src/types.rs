//! Data types for the RRYS scraper
//!
//! This module contains the canonical records returned to callers and the
//! lightweight intermediate shapes decoded from upstream payloads.
//! Canonical records serialize with the JSON keys API consumers expect.

use serde::{Deserialize, Serialize};

/// Canonical media title record.
///
/// Only `id` is guaranteed to be non-empty. Every other field defaults to an
/// empty string and is filled additively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    /// Upstream-assigned identifier
    pub id: String,
    /// Localised (Chinese) display name
    #[serde(rename = "cnName")]
    pub local_name: String,
    /// Full-size poster image
    #[serde(rename = "poster")]
    pub poster_url: String,
    /// Original-language name
    #[serde(rename = "enName", default, skip_serializing_if = "String::is_empty")]
    pub foreign_name: String,
    /// Content page address, set only by a detail fill
    #[serde(rename = "link", default, skip_serializing_if = "String::is_empty")]
    pub page_url: String,
    /// Episode feed address, empty if unknown
    #[serde(rename = "rssLink", default, skip_serializing_if = "String::is_empty")]
    pub feed_url: String,
    /// Free-text airing status
    #[serde(rename = "playStatus", default, skip_serializing_if = "String::is_empty")]
    pub air_status: String,
    /// Region of origin
    #[serde(rename = "area", default, skip_serializing_if = "String::is_empty")]
    pub region: String,
    /// Genre list as published upstream
    #[serde(rename = "category", default, skip_serializing_if = "String::is_empty")]
    pub genre: String,
}

impl Series {
    /// Create a minimal record carrying only an identifier.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// One entry of a series' release feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    /// Identifier of the series this feed belongs to
    pub series_id: String,
    /// Raw feed entry title
    #[serde(rename = "name")]
    pub display_name: String,
    /// Season number, -1 if the title carries no SxxEyy code
    pub season: i32,
    /// Episode number, -1 if the title carries no SxxEyy code
    #[serde(rename = "episode")]
    pub episode_number: i32,
    /// ed2k link, copied verbatim
    #[serde(rename = "ed2k", default, skip_serializing_if = "String::is_empty")]
    pub ed2k_link: String,
    /// Magnet link, copied verbatim
    #[serde(rename = "magnet", default, skip_serializing_if = "String::is_empty")]
    pub magnet_link: String,
}

/// Search hit as decoded from the search API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub external_id: String,
    pub title: String,
    pub thumbnail_url: String,
}

/// Raw `channel/item` entry of an episode feed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedItem {
    pub title: String,
    pub ed2k: String,
    pub magnet: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_with_id_is_minimal() {
        let series = Series::with_id("10733");
        assert_eq!(series.id, "10733");
        assert!(series.local_name.is_empty());
        assert!(series.page_url.is_empty());
        assert!(series.feed_url.is_empty());
    }

    #[test]
    fn test_series_serialization_omits_empty_optional_fields() {
        let series = Series {
            id: "10733".to_string(),
            local_name: "权力的游戏".to_string(),
            poster_url: "http://x/abc.jpg".to_string(),
            ..Series::default()
        };

        let json = serde_json::to_value(&series).unwrap();
        assert_eq!(json["id"], "10733");
        assert_eq!(json["cnName"], "权力的游戏");
        assert_eq!(json["poster"], "http://x/abc.jpg");
        assert!(json.get("enName").is_none());
        assert!(json.get("rssLink").is_none());
        assert!(json.get("playStatus").is_none());
    }

    #[test]
    fn test_series_deserialization_defaults_missing_fields() {
        let series: Series =
            serde_json::from_str(r#"{"id":"1","cnName":"name","poster":""}"#).unwrap();
        assert_eq!(series.id, "1");
        assert!(series.genre.is_empty());
    }

    #[test]
    fn test_episode_serialization_keys() {
        let episode = Episode {
            series_id: "40595".to_string(),
            display_name: "Raised.by.Wolves.S01E01.mp4".to_string(),
            season: 1,
            episode_number: 1,
            ed2k_link: String::new(),
            magnet_link: "magnet:?xt=urn:btih:abc".to_string(),
        };

        let json = serde_json::to_value(&episode).unwrap();
        assert_eq!(json["seriesId"], "40595");
        assert_eq!(json["name"], "Raised.by.Wolves.S01E01.mp4");
        assert_eq!(json["season"], 1);
        assert_eq!(json["episode"], 1);
        assert_eq!(json["magnet"], "magnet:?xt=urn:btih:abc");
        assert!(json.get("ed2k").is_none());
    }
}
