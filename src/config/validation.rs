use crate::config::parser::{PARENT_PAGE_VAR, TOKEN_VAR};
use crate::config::types::{BrowserConfig, Config, NotionConfig, SiteConfig};
use crate::{ConfigError, ConfigResult};
use url::Url;

/// Validates the entire configuration
///
/// Missing secrets are reported first and all together, so the operator sees
/// every variable that needs setting in one run.
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_secrets(&config.notion)?;
    validate_notion_config(&config.notion)?;
    validate_base_url("solved-ac.api-base", &config.solved_ac.api_base)?;
    validate_browser_config(&config.browser)?;
    validate_site_config(&config.site)?;
    Ok(())
}

fn validate_secrets(config: &NotionConfig) -> ConfigResult<()> {
    let mut missing = Vec::new();

    if config.token.trim().is_empty() {
        missing.push(TOKEN_VAR);
    }
    if config.parent_page_id.trim().is_empty() {
        missing.push(PARENT_PAGE_VAR);
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::Missing(missing))
    }
}

fn validate_notion_config(config: &NotionConfig) -> ConfigResult<()> {
    validate_base_url("notion.api-base", &config.api_base)?;

    if config.api_version.trim().is_empty() {
        return Err(ConfigError::Validation(
            "notion.api-version cannot be empty".to_string(),
        ));
    }

    Ok(())
}

fn validate_browser_config(config: &BrowserConfig) -> ConfigResult<()> {
    if config.page_load_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "browser.page-load-timeout-secs must be >= 1".to_string(),
        ));
    }

    if config.ready_selector.trim().is_empty() {
        return Err(ConfigError::Validation(
            "browser.ready-selector cannot be empty".to_string(),
        ));
    }

    if scraper::Selector::parse(&config.ready_selector).is_err() {
        return Err(ConfigError::Validation(format!(
            "browser.ready-selector is not a valid CSS selector: '{}'",
            config.ready_selector
        )));
    }

    Ok(())
}

fn validate_site_config(config: &SiteConfig) -> ConfigResult<()> {
    validate_base_url("site.origin", &config.origin)?;

    if config.name.trim().is_empty() {
        return Err(ConfigError::Validation(
            "site.name cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Checks that `value` is an absolute HTTP(S) URL
fn validate_base_url(field: &str, value: &str) -> ConfigResult<()> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {}: '{}' ({})", field, value, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "{} must use http or https, got '{}'",
            field, value
        )));
    }

    Ok(())
}
