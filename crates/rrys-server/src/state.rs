use std::sync::Arc;

use rrys_core::RrysScraper;

/// Shared state handed to every handler.
///
/// The scraper holds no per-request state, so requests share it without locking.
#[derive(Debug, Clone)]
pub struct AppState {
    pub scraper: Arc<RrysScraper>,
}

impl AppState {
    pub fn new(scraper: RrysScraper) -> Self {
        Self {
            scraper: Arc::new(scraper),
        }
    }
}
