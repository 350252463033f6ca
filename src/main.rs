//! boj-notion main entry point
//!
//! This is the command-line interface that archives one Baekjoon problem as a
//! Notion page per invocation.

use anyhow::Context;
use boj_notion::config::{load_config, Config};
use boj_notion::fetch::{BrowserFetcher, HttpPageFetcher, PageFetcher};
use boj_notion::notion::{DocumentStore, NotionClient};
use boj_notion::pipeline;
use boj_notion::solved::SolvedAcClient;
use boj_notion::url::validate_problem_url;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// boj-notion: archive Baekjoon problems in Notion
///
/// Scrapes a problem page, adds its solved.ac tier and tags, and creates a
/// page under the Notion parent page given by NOTION_PARENT_PAGE_ID.
#[derive(Parser, Debug)]
#[command(name = "boj-notion")]
#[command(version)]
#[command(about = "Archive a Baekjoon problem as a Notion page", long_about = None)]
#[command(after_help = "Examples:\n  boj-notion https://www.acmicpc.net/problem/14716\n  boj-notion --test")]
struct Cli {
    /// Baekjoon problem URL, e.g. https://www.acmicpc.net/problem/14716
    #[arg(value_name = "URL")]
    url: Option<String>,

    /// Only check the Notion connection and exit
    #[arg(long)]
    test: bool,

    /// Optional TOML settings file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error log output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("boj_notion=info,warn"),
            1 => EnvFilter::new("boj_notion=debug,info"),
            2 => EnvFilter::new("boj_notion=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Checked before any network call
    let config = load_config(cli.config.as_deref()).context("failed to load configuration")?;

    if cli.test {
        return handle_connection_test(&config).await;
    }

    let Some(url) = cli.url else {
        Cli::command().print_help()?;
        anyhow::bail!("a Baekjoon problem URL is required");
    };

    if let Err(e) = validate_problem_url(&url, &config.site) {
        anyhow::bail!("{} (example: {}/problem/14716)", e, config.site.origin);
    }

    if config.browser.enabled {
        let fetcher = BrowserFetcher::new(config.browser.clone());
        handle_publish(&config, &fetcher, &url).await
    } else {
        let fetcher = HttpPageFetcher::new(&config.browser)?;
        handle_publish(&config, &fetcher, &url).await
    }
}

/// Handles the --test mode: checks the token against `users/me`
async fn handle_connection_test(config: &Config) -> anyhow::Result<()> {
    println!("🔌 Testing Notion connection...");

    let client = NotionClient::new(&config.notion)?;
    let user = client
        .current_user()
        .await
        .context("Notion connection failed")?;

    println!("✅ Connected to Notion!");
    println!("   Bot: {}", user.name.as_deref().unwrap_or("Unknown"));
    Ok(())
}

/// Handles the main scrape-and-publish operation
async fn handle_publish<F: PageFetcher>(config: &Config, fetcher: &F, url: &str) -> anyhow::Result<()> {
    println!("🔍 Scraping problem: {}", url);

    let metadata = SolvedAcClient::new(&config.solved_ac, &config.browser.user_agent)?;
    let record = pipeline::scrape_problem(config, fetcher, &metadata, url).await?;

    println!("   ✓ Problem: {}", record.title);
    println!("   ✓ Tier: {}", record.tier);
    if !record.tags.is_empty() {
        let shown: Vec<&str> = record.tags.iter().take(5).map(String::as_str).collect();
        println!("   ✓ Tags: {}", shown.join(", "));
    }

    println!("📝 Creating Notion page...");
    let store = NotionClient::new(&config.notion)?;
    let outcome = pipeline::publish_problem(config, &store, &record).await?;

    println!("\n{}", "=".repeat(50));
    println!("{}", outcome.summary());

    Ok(())
}
