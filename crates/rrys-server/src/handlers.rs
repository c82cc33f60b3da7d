//! Request handlers for the `/series` routes.

use axum::extract::{rejection::QueryRejection, Path, Query, State};
use rrys_core::{CancellationToken, Episode, Series};
use serde::Deserialize;
use tokio_util::sync::DropGuard;

use crate::error::{ApiError, ApiResult};
use crate::response::ApiResponse;
use crate::state::AppState;

/// Query parameters for series search
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Free-text keyword
    #[serde(default)]
    pub keyword: String,
    /// Fill every hit from its content page
    #[serde(default)]
    pub details: bool,
}

/// Cancellation token scoped to one request.
///
/// The token fires when the guard is dropped, including when the client
/// disconnects and the handler future is dropped mid-flight.
fn request_cancellation() -> (CancellationToken, DropGuard) {
    let token = CancellationToken::new();
    let guard = token.clone().drop_guard();
    (token, guard)
}

fn require_series_id(series_id: &str) -> ApiResult<&str> {
    let series_id = series_id.trim();
    if series_id.is_empty() {
        return Err(ApiError::bad_request("missing path param 'seriesId'"));
    }
    Ok(series_id)
}

/// `GET /series?keyword=&details=`
pub async fn search_series(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> ApiResult<ApiResponse<Vec<Series>>> {
    let Query(query) = query.map_err(|e| ApiError::bad_request(e.body_text()))?;
    if query.keyword.trim().is_empty() {
        return Err(ApiError::bad_request("missing query param 'keyword'"));
    }

    let (cancel, _guard) = request_cancellation();
    let series = state
        .scraper
        .search(&query.keyword, query.details, &cancel)
        .await?;

    tracing::info!(keyword = %query.keyword, details = query.details, count = series.len(), "Search served");
    Ok(ApiResponse::success(series))
}

/// `GET /series/{series_id}`
pub async fn series_detail(
    State(state): State<AppState>,
    Path(series_id): Path<String>,
) -> ApiResult<ApiResponse<Series>> {
    let series_id = require_series_id(&series_id)?;

    let (cancel, _guard) = request_cancellation();
    let series = state.scraper.detail(series_id, &cancel).await?;

    Ok(ApiResponse::success(series))
}

/// `GET /series/{series_id}/episodes`
pub async fn series_episodes(
    State(state): State<AppState>,
    Path(series_id): Path<String>,
) -> ApiResult<ApiResponse<Vec<Episode>>> {
    let series_id = require_series_id(&series_id)?;

    let (cancel, _guard) = request_cancellation();
    let episodes = state.scraper.episodes(series_id, &cancel).await?;

    tracing::info!(series_id, count = episodes.len(), "Episodes served");
    Ok(ApiResponse::success(episodes))
}
