//! The end-to-end run: scrape, enrich, publish
//!
//! Every external collaborator is passed in, so the same code path runs
//! against headless Chrome and the live APIs or against test doubles.

use crate::config::Config;
use crate::extract::parse_problem_page;
use crate::fetch::PageFetcher;
use crate::notion::{DocumentStore, PublishOutcome, Publisher};
use crate::problem::ProblemRecord;
use crate::solved::{MetadataSource, ProblemMetadata};
use crate::url::{extract_problem_id, ProblemId};
use crate::UrlError;

/// Scrapes `url` and enriches it with solved.ac metadata
///
/// The problem number is extracted before anything is fetched; a URL without
/// one fails immediately with [`UrlError::MissingProblemId`]. Metadata
/// failures are logged and replaced by [`ProblemMetadata::unavailable`].
pub async fn scrape_problem<F, M>(
    config: &Config,
    fetcher: &F,
    metadata: &M,
    url: &str,
) -> crate::Result<ProblemRecord>
where
    F: PageFetcher,
    M: MetadataSource,
{
    let id = extract_problem_id(url).ok_or_else(|| UrlError::MissingProblemId(url.to_string()))?;

    tracing::info!("Fetching problem {} from {}", id, url);
    let html = fetcher.fetch_page(url).await?;
    let page = parse_problem_page(&html, &config.site.origin);
    tracing::debug!(
        "Extracted '{}' with {} example(s)",
        page.title,
        page.examples.len()
    );

    let meta = enrich(metadata, id).await;
    Ok(ProblemRecord::new(id, url, page, meta))
}

/// Looks up tier and tags, degrading to "unknown" on any failure
pub async fn enrich<M: MetadataSource>(metadata: &M, id: ProblemId) -> ProblemMetadata {
    match metadata.problem_metadata(id).await {
        Ok(meta) => meta,
        Err(e) => {
            tracing::warn!("Could not load solved.ac metadata for {}: {}", id, e);
            ProblemMetadata::unavailable()
        }
    }
}

/// Publishes an already scraped record under the configured parent page
pub async fn publish_problem<S: DocumentStore>(
    config: &Config,
    store: &S,
    record: &ProblemRecord,
) -> crate::Result<PublishOutcome> {
    let publisher = Publisher::new(store, &config.notion.parent_page_id, &config.site);
    Ok(publisher.publish(record).await?)
}

/// Runs the whole pipeline for one problem URL
///
/// # Returns
///
/// * `Ok((ProblemRecord, PublishOutcome))` - The record and where it ended up
/// * `Err(BojError)` - Invalid URL, page fetch failure, or Notion rejection
pub async fn run<F, M, S>(
    config: &Config,
    fetcher: &F,
    metadata: &M,
    store: &S,
    url: &str,
) -> crate::Result<(ProblemRecord, PublishOutcome)>
where
    F: PageFetcher,
    M: MetadataSource,
    S: DocumentStore,
{
    let record = scrape_problem(config, fetcher, metadata, url).await?;
    let outcome = publish_problem(config, store, &record).await?;
    Ok((record, outcome))
}
