//! Configuration module for boj-notion
//!
//! Settings come from an optional TOML file; the two secrets (Notion token and
//! parent page id) normally come from the environment and override the file.
//!
//! # Example
//!
//! ```no_run
//! use boj_notion::config::load_config;
//!
//! let config = load_config(None).unwrap();
//! println!("Page load timeout: {}s", config.browser.page_load_timeout_secs);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    BrowserConfig, Config, NotionConfig, SiteConfig, SolvedAcConfig, DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{load_config, load_config_from, parse_config, PARENT_PAGE_VAR, TOKEN_VAR};
