//! Problem page fetching
//!
//! This module contains:
//! - The `PageFetcher` seam used by the pipeline
//! - A headless Chrome fetcher that gets past the judge's bot protection
//! - A plain HTTP fetcher, used when the browser is disabled and in tests

mod browser;
mod http;

pub use browser::BrowserFetcher;
pub use http::{build_http_client, HttpPageFetcher};

use thiserror::Error;

/// Errors that can occur while loading a problem page
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("browser error: {0}")]
    Browser(String),

    #[error("timed out after {seconds}s waiting for '{selector}' on {url}")]
    Timeout {
        url: String,
        selector: String,
        seconds: u64,
    },

    #[error("HTTP {status_code} from {url}")]
    Status { url: String, status_code: u16 },

    #[error("network error for {url}: {source}")]
    Network { url: String, source: reqwest::Error },

    #[error("failed to build HTTP client: {0}")]
    Client(reqwest::Error),
}

/// Anything that can turn a problem URL into rendered HTML
#[allow(async_fn_in_trait)]
pub trait PageFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError>;
}
