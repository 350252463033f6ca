//! Duplicate-aware page publishing

use crate::config::SiteConfig;
use crate::notion::{assemble_page, DocumentStore, NotionError};
use crate::problem::ProblemRecord;
use crate::url::ProblemId;

/// What `Publisher::publish` did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// A new page was created
    Created { url: String },
    /// A page for this problem already existed; nothing was created
    Duplicate { url: String },
}

impl PublishOutcome {
    pub fn url(&self) -> &str {
        match self {
            PublishOutcome::Created { url } | PublishOutcome::Duplicate { url } => url,
        }
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, PublishOutcome::Duplicate { .. })
    }

    /// Status lines for the terminal; the page URL is always the last line
    pub fn summary(&self) -> String {
        match self {
            PublishOutcome::Created { url } => format!("✅ Done!\n📄 Notion page:\n{}", url),
            PublishOutcome::Duplicate { url } => {
                format!("⚠️ This problem is already archived!\n📄 Existing page:\n{}", url)
            }
        }
    }
}

/// Browser URL of a Notion page given its id
pub fn page_url(page_id: &str) -> String {
    format!("https://www.notion.so/{}", page_id.replace('-', ""))
}

/// Creates problem pages under a fixed parent, at most one per problem
pub struct Publisher<'a, S> {
    store: &'a S,
    parent_id: &'a str,
    site: &'a SiteConfig,
}

impl<'a, S: DocumentStore> Publisher<'a, S> {
    pub fn new(store: &'a S, parent_id: &'a str, site: &'a SiteConfig) -> Self {
        Self {
            store,
            parent_id,
            site,
        }
    }

    /// Looks for an existing child page whose title contains `] <id>:`
    ///
    /// This is a substring match on the title format produced by
    /// `page_title`, so an unrelated title that happens to embed the same
    /// text would also match.
    pub async fn find_duplicate(&self, id: ProblemId) -> Result<Option<String>, NotionError> {
        let marker = format!("] {}:", id);
        let pages = self.store.list_child_pages(self.parent_id).await?;

        Ok(pages
            .into_iter()
            .find(|page| page.title.contains(&marker))
            .map(|page| page_url(&page.id)))
    }

    /// Creates the page for `record` unless one already exists
    ///
    /// A failed duplicate check is logged and treated as "no duplicate".
    pub async fn publish(&self, record: &ProblemRecord) -> Result<PublishOutcome, NotionError> {
        match self.find_duplicate(record.id).await {
            Ok(Some(url)) => {
                tracing::info!("Problem {} already has a page: {}", record.id, url);
                return Ok(PublishOutcome::Duplicate { url });
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!("Duplicate check failed, creating page anyway: {}", e);
            }
        }

        let draft = assemble_page(record, self.site);
        tracing::debug!("Creating '{}' with {} blocks", draft.title, draft.blocks.len());

        let page = self.store.create_page(self.parent_id, &draft).await?;
        Ok(PublishOutcome::Created { url: page.url })
    }
}
