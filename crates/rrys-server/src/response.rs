//! JSON response envelope: `{msg, data?, timestamp}`.

use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Envelope wrapped around every API response
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Unix seconds at which the response was produced
    pub timestamp: u64,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying `data`
    pub fn success(data: T) -> Self {
        Self {
            msg: "success".to_string(),
            data: Some(data),
            timestamp: unix_now(),
        }
    }
}

impl ApiResponse<()> {
    /// Failure response carrying only a message
    pub fn failed(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            data: None,
            timestamp: unix_now(),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}
