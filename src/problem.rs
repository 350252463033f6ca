//! The problem record handed from the scraper to the Notion assembler

use crate::solved::{ProblemMetadata, Tier};
use crate::url::ProblemId;

/// Placeholder used when the page has no title element
pub const UNTITLED: &str = "제목 없음";

/// The limits/statistics row at the top of a problem page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Limits {
    pub time_limit: String,
    pub memory_limit: String,
    pub submissions: String,
    pub accepted: String,
    pub solvers: String,
    pub accuracy: String,
}

impl Limits {
    /// Values in table column order
    pub fn cells(&self) -> [&str; 6] {
        [
            self.time_limit.as_str(),
            self.memory_limit.as_str(),
            self.submissions.as_str(),
            self.accepted.as_str(),
            self.solvers.as_str(),
            self.accuracy.as_str(),
        ]
    }
}

/// A long-form section (description, input or output) and its images
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    pub text: String,
    /// Absolute image URLs in document order
    pub images: Vec<String>,
}

/// One sample input/output pair
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Example {
    pub input: String,
    pub output: String,
}

/// Everything scraped from a problem page, before enrichment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemPage {
    pub title: String,
    pub limits: Limits,
    pub description: Section,
    pub input: Section,
    pub output: Section,
    pub examples: Vec<Example>,
}

/// A fully scraped and enriched problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemRecord {
    pub id: ProblemId,
    pub url: String,
    pub title: String,
    pub tier: Tier,
    pub tier_level: i64,
    pub tags: Vec<String>,
    pub limits: Limits,
    pub description: Section,
    pub input: Section,
    pub output: Section,
    pub examples: Vec<Example>,
}

impl ProblemRecord {
    /// Combines a scraped page with its solved.ac metadata
    pub fn new(id: ProblemId, url: impl Into<String>, page: ProblemPage, meta: ProblemMetadata) -> Self {
        Self {
            id,
            url: url.into(),
            title: page.title,
            tier: meta.tier,
            tier_level: meta.level,
            tags: meta.tags,
            limits: page.limits,
            description: page.description,
            input: page.input,
            output: page.output,
            examples: page.examples,
        }
    }
}
