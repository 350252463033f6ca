use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigResult;
use std::path::Path;

/// Environment variable holding the Notion integration token
pub const TOKEN_VAR: &str = "NOTION_TOKEN";

/// Environment variable holding the parent page identifier
pub const PARENT_PAGE_VAR: &str = "NOTION_PARENT_PAGE_ID";

/// Loads configuration from an optional TOML file and the process environment
///
/// # Arguments
///
/// * `path` - Optional path to a TOML settings file; defaults apply without one
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to read, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use boj_notion::config::load_config;
///
/// let config = load_config(None).unwrap();
/// println!("Publishing under: {}", config.notion.parent_page_id);
/// ```
pub fn load_config(path: Option<&Path>) -> ConfigResult<Config> {
    load_config_from(path, |key| std::env::var(key).ok())
}

/// Loads configuration using `env` to look up secrets
///
/// Values found through `env` take precedence over those in the file. Empty
/// values count as unset.
pub fn load_config_from<F>(path: Option<&Path>, env: F) -> ConfigResult<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match path {
        Some(path) => parse_config(&std::fs::read_to_string(path)?)?,
        None => Config::default(),
    };

    apply_env(&mut config, env);
    validate(&config)?;

    Ok(config)
}

/// Parses a TOML settings document without validating it
pub fn parse_config(content: &str) -> ConfigResult<Config> {
    Ok(toml::from_str(content)?)
}

fn apply_env<F>(config: &mut Config, env: F)
where
    F: Fn(&str) -> Option<String>,
{
    let lookup = |key: &str| env(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    if let Some(token) = lookup(TOKEN_VAR) {
        config.notion.token = token;
    }
    if let Some(parent) = lookup(PARENT_PAGE_VAR) {
        config.notion.parent_page_id = parent;
    }
}
