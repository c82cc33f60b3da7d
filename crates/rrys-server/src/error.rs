use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rrys_core::RrysError;
use thiserror::Error;

use crate::response::ApiResponse;

/// Error returned by API handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed request input
    #[error("{0}")]
    BadRequest(String),

    /// Scraper failure
    #[error(transparent)]
    Scraper(#[from] RrysError),
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Scraper(e) if e.is_invalid_input() => StatusCode::BAD_REQUEST,
            ApiError::Scraper(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Rejected request: {}", self);
        }

        (status, Json(ApiResponse::failed(self.to_string()))).into_response()
    }
}

/// Result type returned by handlers
pub type ApiResult<T> = Result<T, ApiError>;
