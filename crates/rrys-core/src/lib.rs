//! RRYS Scraper Core Library
//!
//! This crate provides the scrape-and-normalise pipeline for series metadata
//! published by the RRYS content site.
//!
//! # Features
//! - Search for series by keyword, optionally filled with page details
//! - Resolve a series id into a detail record (content page + airing status)
//! - Resolve a series id into its episode list from the release feed
//! - Single-attempt upstream calls bounded by a timeout and a cancellation token

pub mod client;
pub mod error;
pub mod parser;
pub mod scraper;
pub mod types;

// Re-export main types for convenience
pub use client::{ClientConfig, RrysClient};
pub use error::{RrysError, Result};
pub use parser::STATUS_UNAVAILABLE;
pub use scraper::RrysScraper;
pub use types::{Episode, FeedItem, SearchHit, Series};

pub use tokio_util::sync::CancellationToken;
