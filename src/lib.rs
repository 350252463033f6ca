//! boj-notion: Baekjoon problems archived as Notion pages
//!
//! This crate scrapes a single Baekjoon Online Judge problem page, enriches it
//! with tier and tag metadata from solved.ac, and publishes a formatted child
//! page under a fixed Notion parent page.

pub mod config;
pub mod extract;
pub mod fetch;
pub mod notion;
pub mod pipeline;
pub mod problem;
pub mod solved;
pub mod url;

use thiserror::Error;

/// Main error type for boj-notion operations
#[derive(Debug, Error)]
pub enum BojError {
    #[error("Invalid problem URL: {0}")]
    Url(#[from] UrlError),

    #[error("Failed to fetch problem page: {0}")]
    Fetch(#[from] fetch::FetchError),

    #[error("Notion error: {0}")]
    Notion(#[from] notion::NotionError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Missing required environment variable(s): {}", .0.join(", "))]
    Missing(Vec<&'static str>),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Problem URL errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Not a {expected} problem URL: {url}")]
    ForeignHost { url: String, expected: String },

    #[error("No problem number found in URL: {0}")]
    MissingProblemId(String),
}

/// Result type alias for boj-notion operations
pub type Result<T> = std::result::Result<T, BojError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use problem::ProblemRecord;
pub use solved::Tier;
pub use url::{extract_problem_id, ProblemId};
