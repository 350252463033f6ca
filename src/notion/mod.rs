//! Notion output: page assembly, publishing and the REST client
//!
//! This module handles:
//! - Turning a `ProblemRecord` into Notion blocks
//! - Skipping problems that already have a page under the parent
//! - Talking to the Notion API

mod assemble;
mod blocks;
mod client;
mod publish;

#[cfg(test)]
pub(crate) mod memory;

pub use assemble::{assemble_page, localize_tier, page_title, split_text, tier_icon, PageDraft};
pub use blocks::{chunk_chars, Block, RichText, MAX_BLOCK_CHARS};
pub use client::NotionClient;
pub use publish::{page_url, PublishOutcome, Publisher};

use thiserror::Error;

/// Errors that can occur while talking to Notion
#[derive(Debug, Error)]
pub enum NotionError {
    #[error("failed to build HTTP client: {0}")]
    Client(reqwest::Error),

    #[error("request to {endpoint} failed: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },

    #[error("Notion API returned HTTP {status} ({code}): {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    #[error("unexpected response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        source: reqwest::Error,
    },
}

/// A direct child page of the parent page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildPage {
    pub id: String,
    pub title: String,
}

/// A page returned by the create call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedPage {
    pub id: String,
    pub url: String,
}

/// The integration's own user, as reported by `users/me`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotUser {
    pub id: String,
    pub name: Option<String>,
}

/// The remote document store the publisher writes to
#[allow(async_fn_in_trait)]
pub trait DocumentStore {
    /// Lists the child pages directly under `parent_id`
    async fn list_child_pages(&self, parent_id: &str) -> Result<Vec<ChildPage>, NotionError>;

    /// Creates a page with `draft`'s title, icon and blocks under `parent_id`
    async fn create_page(&self, parent_id: &str, draft: &PageDraft) -> Result<CreatedPage, NotionError>;

    /// Returns the user the token belongs to
    async fn current_user(&self) -> Result<BotUser, NotionError>;
}
