//! Error types for the RRYS scraper
//!
//! Mandatory-path failures (search call, content page, display title, feed)
//! surface as [`RrysError`]. Optional-path failures never reach this type:
//! they degrade the record instead.
//! RrysError implements Serialize so it can be embedded in API responses.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for RRYS scraper operations
#[derive(Error, Debug)]
pub enum RrysError {
    /// Transport failure, including timeouts
    #[error("HTTP request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("Upstream returned HTTP {status} for {url}")]
    HttpStatus {
        /// Status code returned by the upstream
        status: u16,
        /// Address that was requested
        url: String,
    },

    /// Payload did not match the expected JSON or XML shape
    #[error("Failed to decode upstream payload: {0}")]
    Decode(String),

    /// Content page could not be turned into a document
    #[error("Failed to parse HTML: {0}")]
    Parse(String),

    /// A mandatory field is missing from an otherwise readable page
    #[error("Field not found: {0}")]
    FieldNotFound(String),

    /// Empty or missing identifier / keyword
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The series page does not advertise an episode feed
    #[error("Feed unavailable for series {0}")]
    FeedUnavailable(String),

    /// The caller cancelled the operation
    #[error("Operation cancelled")]
    Cancelled,
}

impl RrysError {
    /// Whether this error was caused by the caller rather than the upstream.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, RrysError::InvalidInput(_))
    }
}

/// Serialize RrysError as its display string
impl Serialize for RrysError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for RRYS scraper operations
pub type Result<T> = std::result::Result<T, RrysError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_http_status() {
        let error = RrysError::HttpStatus {
            status: 404,
            url: "http://localhost/resource/1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Upstream returned HTTP 404 for http://localhost/resource/1"
        );
    }

    #[test]
    fn test_error_display_decode() {
        let error = RrysError::Decode("expected array".to_string());
        assert_eq!(
            error.to_string(),
            "Failed to decode upstream payload: expected array"
        );
    }

    #[test]
    fn test_error_display_field_not_found() {
        let error = RrysError::FieldNotFound("title".to_string());
        assert_eq!(error.to_string(), "Field not found: title");
    }

    #[test]
    fn test_error_display_feed_unavailable() {
        let error = RrysError::FeedUnavailable("40595".to_string());
        assert_eq!(error.to_string(), "Feed unavailable for series 40595");
    }

    #[test]
    fn test_is_invalid_input() {
        assert!(RrysError::InvalidInput("series id".to_string()).is_invalid_input());
        assert!(!RrysError::Cancelled.is_invalid_input());
    }

    #[test]
    fn test_error_serialize() {
        let error = RrysError::Parse("empty page body".to_string());
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(json, "\"Failed to parse HTML: empty page body\"");
    }

    #[test]
    fn test_error_serialize_cancelled() {
        let json = serde_json::to_string(&RrysError::Cancelled).unwrap();
        assert_eq!(json, "\"Operation cancelled\"");
    }
}
