//! RRYS metadata HTTP API
//!
//! Exposes the scraper as three JSON endpoints:
//! - `GET /series?keyword=&details=` - search
//! - `GET /series/{series_id}` - series detail
//! - `GET /series/{series_id}/episodes` - episode list

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod state;

use rrys_core::{RrysClient, RrysScraper};

pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use response::ApiResponse;
pub use router::create_router;
pub use state::AppState;

/// Build the application state for `config`.
pub fn build_state(config: &ServerConfig) -> rrys_core::Result<AppState> {
    let client = RrysClient::with_config(config.client_config())?;
    Ok(AppState::new(RrysScraper::with_client(client)))
}

/// Serve the API until SIGINT or SIGTERM, then drain in-flight requests.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state(&config)?;
    let app = create_router(state);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(upstream = %config.domain, "Start Server @ {}", addr);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server exiting");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown Server ...");
}
