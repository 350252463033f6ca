//! solved.ac metadata: tier and algorithm tags for a problem
//!
//! This module contains:
//! - The `MetadataSource` seam the pipeline depends on
//! - The solved.ac REST client
//! - The level -> tier table and tag label selection

mod client;
mod tags;
mod tier;

pub use client::SolvedAcClient;
pub use tags::{tag_label, DisplayName, TagEntry};
pub use tier::{Rank, Tier};

use crate::url::ProblemId;
use thiserror::Error;

/// Errors from the metadata source
///
/// The pipeline never aborts on these; it falls back to
/// [`ProblemMetadata::unavailable`].
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("failed to build HTTP client: {0}")]
    Client(reqwest::Error),

    #[error("request for problem {id} failed: {source}")]
    Http { id: ProblemId, source: reqwest::Error },

    #[error("solved.ac returned HTTP {status} for problem {id}")]
    Status { id: ProblemId, status: u16 },

    #[error("unexpected solved.ac response for problem {id}: {source}")]
    Decode { id: ProblemId, source: reqwest::Error },
}

/// Tier and tags for one problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemMetadata {
    pub tier: Tier,
    pub level: i64,
    pub tags: Vec<String>,
}

impl ProblemMetadata {
    /// Used when solved.ac cannot be reached or answers with garbage
    pub fn unavailable() -> Self {
        Self {
            tier: Tier::Unknown,
            level: 0,
            tags: Vec::new(),
        }
    }

    /// Builds metadata from a solved.ac level and its raw tag entries
    pub fn from_level_and_tags(level: i64, tags: &[TagEntry]) -> Self {
        Self {
            tier: Tier::from_level(level),
            level,
            tags: tags.iter().map(tag_label).collect(),
        }
    }
}

/// Anything that can look up tier/tag metadata by problem number
#[allow(async_fn_in_trait)]
pub trait MetadataSource {
    async fn problem_metadata(&self, id: ProblemId) -> Result<ProblemMetadata, MetadataError>;
}
