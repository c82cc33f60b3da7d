use axum::{routing::get, Router};

use crate::{handlers, state::AppState};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/series", get(handlers::search_series))
        .route("/series/{series_id}", get(handlers::series_detail))
        .route("/series/{series_id}/episodes", get(handlers::series_episodes))
        .with_state(state)
}
