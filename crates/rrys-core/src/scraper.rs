//! Main RRYS Scraper API
//!
//! This module combines the HTTP client with the payload decoders to turn
//! upstream data into canonical [`Series`] and [`Episode`] records.

use tokio_util::sync::CancellationToken;

use crate::client::RrysClient;
use crate::error::{RrysError, Result};
use crate::parser::{
    full_size_poster, parse_episode_code, parse_series_page, PageFields, STATUS_UNAVAILABLE,
};
use crate::types::{Episode, Series};

/// Main scraper API for RRYS
///
/// Every operation takes a [`CancellationToken`]; cancelling it aborts all
/// upstream calls still in flight for that operation.
///
/// # Example
/// ```no_run
/// use rrys_core::{CancellationToken, RrysScraper};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let scraper = RrysScraper::new()?;
///     let cancel = CancellationToken::new();
///
///     let results = scraper.search("权力的游戏", false, &cancel).await?;
///     println!("Found {} series", results.len());
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RrysScraper {
    client: RrysClient,
}

impl RrysScraper {
    /// Create a new scraper with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        let client = RrysClient::new()?;
        Ok(Self { client })
    }

    /// Create a new scraper with a custom client.
    pub fn with_client(client: RrysClient) -> Self {
        Self { client }
    }

    /// Search for series by keyword.
    ///
    /// Results keep the upstream order. With `with_details`, each hit is
    /// filled from its content page; a hit whose fill fails is returned in its
    /// minimal state instead of failing the whole search.
    ///
    /// # Returns
    /// * `Ok(Vec<Series>)` with matching series
    /// * `Err(RrysError::InvalidInput)` if the keyword is blank
    /// * the search call's error otherwise
    pub async fn search(
        &self,
        keyword: &str,
        with_details: bool,
        cancel: &CancellationToken,
    ) -> Result<Vec<Series>> {
        if keyword.trim().is_empty() {
            return Err(RrysError::InvalidInput(
                "search keyword must not be empty".to_string(),
            ));
        }

        let hits = self.client.search_raw(keyword, cancel).await?;

        let mut results = Vec::with_capacity(hits.len());
        for hit in hits {
            let series = Series {
                id: hit.external_id,
                local_name: hit.title,
                poster_url: full_size_poster(&hit.thumbnail_url),
                ..Series::default()
            };

            if !with_details {
                results.push(series);
                continue;
            }

            let mut filled = series.clone();
            match self.fill_detail(&mut filled, cancel).await {
                Ok(()) => results.push(filled),
                Err(RrysError::Cancelled) => return Err(RrysError::Cancelled),
                Err(e) => {
                    tracing::warn!(series_id = %series.id, "Keeping unfilled search entry: {}", e);
                    results.push(series);
                }
            }
        }

        Ok(results)
    }

    /// Get the detail record of a series.
    ///
    /// # Returns
    /// * `Ok(Series)` filled from the content page and status endpoint
    /// * `Err(RrysError::InvalidInput)` if `series_id` is empty
    /// * any fill error otherwise
    pub async fn detail(&self, series_id: &str, cancel: &CancellationToken) -> Result<Series> {
        let mut series = Series::with_id(series_id);
        self.fill_detail(&mut series, cancel).await?;
        Ok(series)
    }

    /// Get the episode list of a series from its feed, in feed order.
    ///
    /// # Returns
    /// * `Ok(Vec<Episode>)` with one record per feed item
    /// * `Err(RrysError::FeedUnavailable)` if the series page has no feed link
    /// * any fill or feed error otherwise
    pub async fn episodes(
        &self,
        series_id: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<Episode>> {
        let series = self.detail(series_id, cancel).await.inspect_err(|e| {
            tracing::warn!(series_id, "Cannot resolve series for episodes: {}", e);
        })?;

        if series.feed_url.is_empty() {
            return Err(RrysError::FeedUnavailable(series_id.to_string()));
        }

        let items = self.client.feed_raw(&series.feed_url, cancel).await?;

        let episodes = items
            .into_iter()
            .map(|item| {
                let (season, episode_number) = parse_episode_code(&item.title);
                Episode {
                    series_id: series_id.to_string(),
                    display_name: item.title,
                    season,
                    episode_number,
                    ed2k_link: item.ed2k,
                    magnet_link: item.magnet,
                }
            })
            .collect();

        Ok(episodes)
    }

    /// Enrich `series` from its content page and status endpoint.
    ///
    /// The status fetch runs concurrently with the page fetch and is joined
    /// last. `series` is only modified when the fill succeeds.
    async fn fill_detail(&self, series: &mut Series, cancel: &CancellationToken) -> Result<()> {
        if series.id.is_empty() {
            return Err(RrysError::InvalidInput(
                "series id must not be empty".to_string(),
            ));
        }

        let status_cancel = cancel.child_token();
        // Cancels the status fetch on every early return below.
        let _status_guard = status_cancel.clone().drop_guard();
        let status_task = {
            let client = self.client.clone();
            let series_id = series.id.clone();
            tokio::spawn(async move { client.status_raw(&series_id, &status_cancel).await })
        };

        let page_url = self.client.page_url(&series.id);
        let fields = {
            let document = self.client.page_raw(&series.id, cancel).await?;
            parse_series_page(&document)?
        };

        let air_status = match status_task.await {
            Ok(status) => status,
            Err(e) => {
                tracing::warn!(series_id = %series.id, "Airing status task failed: {}", e);
                STATUS_UNAVAILABLE.to_string()
            }
        };
        // The status task reports cancellation as the placeholder.
        if cancel.is_cancelled() {
            return Err(RrysError::Cancelled);
        }

        apply_page_fields(series, fields);
        series.page_url = page_url;
        series.air_status = air_status;
        Ok(())
    }
}

fn apply_page_fields(series: &mut Series, fields: PageFields) {
    series.local_name = fields.local_name;
    series.foreign_name = fields.foreign_name;
    series.feed_url = fields.feed_url;
    series.region = fields.region;
    series.genre = fields.genre;
    if series.poster_url.is_empty() {
        series.poster_url = fields.poster_url;
    }
}
