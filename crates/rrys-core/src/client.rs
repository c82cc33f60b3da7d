//! HTTP client for the RRYS upstream
//!
//! This module wraps the four upstream calls (search API, status endpoint,
//! content page, episode feed). Each call is a single attempt bounded by the
//! configured timeout and by the caller's cancellation token.

use std::future::Future;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE};
use scraper::Html;
use tokio_util::sync::CancellationToken;

use crate::error::{RrysError, Result};
use crate::parser::{parse_feed, parse_play_status, parse_search_results, STATUS_UNAVAILABLE};
use crate::types::{FeedItem, SearchHit};

/// Default upstream site
const DEFAULT_BASE_URL: &str = "http://www.rrys2020.com";

/// Default User-Agent mimicking a modern browser
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Default Accept-Language header for Chinese content
const DEFAULT_ACCEPT_LANGUAGE: &str = "zh-CN,zh;q=0.9,en;q=0.8";

/// Configuration for the RRYS HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Scheme and host of the upstream site (default: http://www.rrys2020.com)
    pub base_url: String,
    /// Per-request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// User-Agent header sent upstream
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Configuration targeting `domain` over plain HTTP, other values default.
    pub fn for_domain(domain: &str) -> Self {
        Self {
            base_url: format!("http://{}", domain),
            ..Self::default()
        }
    }
}

/// HTTP client for the RRYS upstream
///
/// Cloning is cheap: clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct RrysClient {
    /// Underlying HTTP client
    client: reqwest::Client,
    /// Upstream base URL without trailing slash
    base_url: String,
}

impl RrysClient {
    /// Create a new client with default configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static(DEFAULT_ACCEPT_LANGUAGE),
        );

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Upstream base URL this client targets
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Address of the content page for a series
    pub fn page_url(&self, series_id: &str) -> String {
        format!(
            "{}/resource/{}",
            self.base_url,
            urlencoding::encode(series_id)
        )
    }

    fn search_url(&self, keyword: &str) -> String {
        format!(
            "{}/search/api?keyword={}&type=resource",
            self.base_url,
            urlencoding::encode(keyword)
        )
    }

    fn status_url(&self, series_id: &str) -> String {
        format!(
            "{}/resource/index_json/rid/{}/channel/tv",
            self.base_url,
            urlencoding::encode(series_id)
        )
    }

    /// Search the upstream for series matching `keyword`.
    ///
    /// # Errors
    /// - `RrysError::Fetch` / `RrysError::HttpStatus` - request failed
    /// - `RrysError::Decode` - response is not the expected JSON envelope
    /// - `RrysError::Cancelled` - `cancel` fired
    pub async fn search_raw(
        &self,
        keyword: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<SearchHit>> {
        let url = self.search_url(keyword);
        tracing::debug!("Searching upstream: {}", url);

        let body = with_cancel(cancel, self.fetch_bytes(&url)).await?;
        let hits = parse_search_results(&body)?;

        tracing::debug!("Search for {:?} returned {} hits", keyword, hits.len());
        Ok(hits)
    }

    /// Fetch the airing status of a series.
    ///
    /// Never fails: any transport, body or decode problem yields
    /// [`STATUS_UNAVAILABLE`].
    pub async fn status_raw(&self, series_id: &str, cancel: &CancellationToken) -> String {
        let url = self.status_url(series_id);
        tracing::debug!("Fetching airing status: {}", url);

        let body = match with_cancel(cancel, self.fetch_text(&url)).await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(series_id, "Airing status unavailable: {}", e);
                return STATUS_UNAVAILABLE.to_string();
            }
        };

        match parse_play_status(&body) {
            Some(status) => status,
            None => {
                tracing::warn!(series_id, "Airing status payload unreadable: {:?}", body);
                STATUS_UNAVAILABLE.to_string()
            }
        }
    }

    /// Fetch and parse the content page of a series.
    ///
    /// # Errors
    /// - `RrysError::Fetch` / `RrysError::HttpStatus` - request failed
    /// - `RrysError::Parse` - body is empty
    /// - `RrysError::Cancelled` - `cancel` fired
    pub async fn page_raw(&self, series_id: &str, cancel: &CancellationToken) -> Result<Html> {
        let url = self.page_url(series_id);
        tracing::debug!("Fetching content page: {}", url);

        let html = with_cancel(cancel, self.fetch_text(&url)).await?;
        if html.trim().is_empty() {
            return Err(RrysError::Parse(format!("empty page body from {}", url)));
        }

        Ok(Html::parse_document(&html))
    }

    /// Fetch and parse an episode feed. The feed address comes from the
    /// content page and may point at any host.
    ///
    /// # Errors
    /// - `RrysError::Fetch` / `RrysError::HttpStatus` - request failed
    /// - `RrysError::Decode` - malformed XML
    /// - `RrysError::Cancelled` - `cancel` fired
    pub async fn feed_raw(&self, url: &str, cancel: &CancellationToken) -> Result<Vec<FeedItem>> {
        tracing::debug!("Fetching episode feed: {}", url);

        let body = with_cancel(cancel, self.fetch_bytes(url)).await?;
        let items = parse_feed(&body)?;

        tracing::debug!("Parsed {} items from episode feed", items.len());
        Ok(items)
    }

    /// Send a GET request and reject non-success statuses.
    async fn send(&self, url: &str) -> Result<reqwest::Response> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(RrysError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response)
    }

    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.send(url).await?;
        Ok(response.bytes().await?.to_vec())
    }

    async fn fetch_text(&self, url: &str) -> Result<String> {
        let response = self.send(url).await?;
        Ok(response.text().await?)
    }
}

/// Run `operation` unless `cancel` fires first.
///
/// The losing future is dropped, which releases any in-flight response body.
async fn with_cancel<T>(
    cancel: &CancellationToken,
    operation: impl Future<Output = Result<T>>,
) -> Result<T> {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(RrysError::Cancelled),
        result = operation => result,
    }
}
