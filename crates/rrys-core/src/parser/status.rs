//! Airing status payload decoder.
//!
//! The status endpoint answers with a JavaScript assignment,
//! `var index_info={...}`, rather than plain JSON.

use serde::Deserialize;
use serde_json::Value;

/// Literal that precedes the JSON object in the status response body.
pub const STATUS_PREFIX: &str = "var index_info=";

/// Placeholder reported when the airing status cannot be retrieved.
pub const STATUS_UNAVAILABLE: &str = "无法获取连载状态";

#[derive(Debug, Deserialize)]
struct StatusPayload {
    #[serde(default)]
    play_status: Value,
}

/// Decode the airing status from a raw status response body.
///
/// The first `STATUS_PREFIX.len()` bytes are dropped unconditionally.
/// Returns `None` if the body is empty, shorter than the prefix, or not JSON
/// after the prefix. A missing or non-string `play_status` decodes to an
/// empty status.
pub fn parse_play_status(body: &str) -> Option<String> {
    if body.is_empty() {
        return None;
    }
    let json = body.get(STATUS_PREFIX.len()..)?;
    let payload: StatusPayload = serde_json::from_str(json.trim()).ok()?;

    Some(match payload.play_status {
        Value::String(status) => status,
        _ => String::new(),
    })
}
