use serde::Deserialize;
use url::Url;

/// Desktop Chrome user agent sent by both page fetchers
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Main configuration structure for boj-notion
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub notion: NotionConfig,
    #[serde(rename = "solved-ac")]
    pub solved_ac: SolvedAcConfig,
    pub browser: BrowserConfig,
    pub site: SiteConfig,
}

/// Notion API access
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NotionConfig {
    /// Integration token, normally supplied through `NOTION_TOKEN`
    pub token: String,

    /// Page under which problem pages are created, normally `NOTION_PARENT_PAGE_ID`
    #[serde(rename = "parent-page-id")]
    pub parent_page_id: String,

    /// Base URL of the Notion REST API
    #[serde(rename = "api-base")]
    pub api_base: String,

    /// Value of the `Notion-Version` header
    #[serde(rename = "api-version")]
    pub api_version: String,
}

impl Default for NotionConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            parent_page_id: String::new(),
            api_base: "https://api.notion.com".to_string(),
            api_version: "2022-06-28".to_string(),
        }
    }
}

/// solved.ac metadata API
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SolvedAcConfig {
    #[serde(rename = "api-base")]
    pub api_base: String,
}

impl Default for SolvedAcConfig {
    fn default() -> Self {
        Self {
            api_base: "https://solved.ac".to_string(),
        }
    }
}

/// Page loading behaviour
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Load pages through headless Chrome; a plain HTTP GET is used otherwise
    pub enabled: bool,

    /// How long to wait for the ready selector to appear (seconds)
    #[serde(rename = "page-load-timeout-secs")]
    pub page_load_timeout_secs: u64,

    /// Element whose presence marks the page as loaded
    #[serde(rename = "ready-selector")]
    pub ready_selector: String,

    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            page_load_timeout_secs: 10,
            ready_selector: "#problem_title".to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// The judge site being scraped
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Scheme and host used to absolutise image URLs
    pub origin: String,

    /// Display name used in page titles
    pub name: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            origin: "https://www.acmicpc.net".to_string(),
            name: "백준".to_string(),
        }
    }
}

impl SiteConfig {
    /// Host part of the origin, e.g. `www.acmicpc.net`
    ///
    /// Empty when the origin does not parse; validation rejects such origins.
    pub fn host(&self) -> String {
        Url::parse(&self.origin)
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
            .unwrap_or_default()
    }
}
