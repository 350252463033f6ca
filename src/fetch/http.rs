//! Plain HTTP fetching
//!
//! Builds the `reqwest` clients shared by every outbound call and provides a
//! `PageFetcher` that skips the browser entirely.

use crate::config::BrowserConfig;
use crate::fetch::{FetchError, PageFetcher};
use reqwest::Client;
use std::time::Duration;

/// Builds an HTTP client with the given user agent and overall timeout
///
/// # Arguments
///
/// * `user_agent` - Value of the `User-Agent` header
/// * `timeout` - Total time allowed per request
///
/// # Example
///
/// ```no_run
/// use boj_notion::fetch::build_http_client;
/// use std::time::Duration;
///
/// let client = build_http_client("boj-notion/1.0", Duration::from_secs(10)).unwrap();
/// ```
pub fn build_http_client(user_agent: &str, timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches problem pages with a single GET request
pub struct HttpPageFetcher {
    client: Client,
}

impl HttpPageFetcher {
    pub fn new(config: &BrowserConfig) -> Result<Self, FetchError> {
        let timeout = Duration::from_secs(config.page_load_timeout_secs);
        let client = build_http_client(&config.user_agent, timeout).map_err(FetchError::Client)?;
        Ok(Self { client })
    }
}

impl PageFetcher for HttpPageFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Network {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status_code: status.as_u16(),
            });
        }

        response.text().await.map_err(|source| FetchError::Network {
            url: url.to_string(),
            source,
        })
    }
}
