//! Headless Chrome page fetcher
//!
//! A browser is launched per fetch and closed again before `fetch_page`
//! returns, whether or not the page loaded.

use crate::config::BrowserConfig;
use crate::fetch::{FetchError, PageFetcher};
use chromiumoxide::browser::{Browser, BrowserConfig as ChromeConfig};
use chromiumoxide::Page;
use futures::StreamExt;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Loads pages in headless Chrome and waits for a ready marker element
pub struct BrowserFetcher {
    config: BrowserConfig,
}

impl BrowserFetcher {
    pub fn new(config: BrowserConfig) -> Self {
        Self { config }
    }

    fn launch_config(&self) -> Result<ChromeConfig, FetchError> {
        ChromeConfig::builder()
            .arg("--no-sandbox")
            .arg("--disable-dev-shm-usage")
            .arg("--disable-gpu")
            .arg(format!("--user-agent={}", self.config.user_agent))
            .build()
            .map_err(FetchError::Browser)
    }

    /// Opens `url` and returns its HTML once the ready selector is present
    async fn load(&self, browser: &Browser, url: &str) -> Result<String, FetchError> {
        let page = browser
            .new_page(url)
            .await
            .map_err(|e| FetchError::Browser(format!("failed to open {}: {}", url, e)))?;

        let seconds = self.config.page_load_timeout_secs;
        let selector = self.config.ready_selector.as_str();

        tokio::time::timeout(
            Duration::from_secs(seconds),
            wait_for_element(&page, selector),
        )
        .await
        .map_err(|_| FetchError::Timeout {
            url: url.to_string(),
            selector: selector.to_string(),
            seconds,
        })?;

        page.content()
            .await
            .map_err(|e| FetchError::Browser(format!("failed to read page source: {}", e)))
    }
}

/// Polls until `selector` matches an element on `page`
async fn wait_for_element(page: &Page, selector: &str) {
    loop {
        if page.find_element(selector).await.is_ok() {
            return;
        }
        tokio::time::sleep(POLL_INTERVAL).await;
    }
}

impl PageFetcher for BrowserFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        tracing::debug!("Launching headless browser for {}", url);

        let (mut browser, mut handler) = Browser::launch(self.launch_config()?)
            .await
            .map_err(|e| FetchError::Browser(format!("failed to launch browser: {}", e)))?;

        let events = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        let result = self.load(&browser, url).await;

        if let Err(e) = browser.close().await {
            tracing::warn!("Failed to close browser cleanly: {}", e);
        }
        if let Err(e) = browser.wait().await {
            tracing::warn!("Failed to wait for browser exit: {}", e);
        }
        events.abort();

        tracing::debug!("Browser closed");
        result
    }
}

