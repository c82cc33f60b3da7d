//! Search API payload decoder.
//!
//! The envelope itself is strict: anything other than an object with an
//! optional `data` array of objects is rejected as a whole. Fields inside an
//! entry are lenient and degrade to empty strings.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{RrysError, Result};
use crate::types::SearchHit;

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    #[serde(default)]
    data: Option<Vec<RawSearchItem>>,
}

#[derive(Debug, Deserialize)]
struct RawSearchItem {
    #[serde(default, deserialize_with = "lenient_string")]
    itemid: String,
    #[serde(default, deserialize_with = "lenient_string")]
    title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    poster: String,
}

/// Accept strings and numbers; anything else becomes an empty string.
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// Decode the search API response body into search hits, in upstream order.
///
/// Entries without an identifier are dropped.
///
/// # Errors
/// `RrysError::Decode` if the body is not a JSON object or `data` is not an
/// array of objects.
pub fn parse_search_results(body: &[u8]) -> Result<Vec<SearchHit>> {
    let envelope: SearchEnvelope = serde_json::from_slice(body)
        .map_err(|e| RrysError::Decode(format!("search response: {}", e)))?;

    let mut hits = Vec::new();
    for item in envelope.data.unwrap_or_default() {
        if item.itemid.trim().is_empty() {
            tracing::warn!(title = %item.title, "Skipping search entry without itemid");
            continue;
        }
        hits.push(SearchHit {
            external_id: item.itemid,
            title: item.title,
            thumbnail_url: item.poster,
        });
    }

    Ok(hits)
}

/// Turn a thumbnail address into the full-size image address by removing the
/// first `s_` marker.
///
/// # Examples
/// ```
/// use rrys_core::parser::full_size_poster;
///
/// assert_eq!(full_size_poster("http://x/s_abc.jpg"), "http://x/abc.jpg");
/// ```
pub fn full_size_poster(thumbnail_url: &str) -> String {
    thumbnail_url.replacen("s_", "", 1)
}
