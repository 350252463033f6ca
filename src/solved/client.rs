//! solved.ac REST client

use crate::config::SolvedAcConfig;
use crate::fetch::build_http_client;
use crate::solved::{MetadataError, MetadataSource, ProblemMetadata, TagEntry};
use crate::url::ProblemId;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct ProblemResponse {
    #[serde(default)]
    level: Option<i64>,

    #[serde(default)]
    tags: Option<Vec<TagEntry>>,
}

/// Client for `GET /api/v3/problem/show`
pub struct SolvedAcClient {
    client: Client,
    api_base: String,
}

impl SolvedAcClient {
    /// Builds a client for the configured API base
    pub fn new(config: &SolvedAcConfig, user_agent: &str) -> Result<Self, MetadataError> {
        let client = build_http_client(user_agent, Duration::from_secs(15))
            .map_err(MetadataError::Client)?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
        })
    }
}

impl MetadataSource for SolvedAcClient {
    async fn problem_metadata(&self, id: ProblemId) -> Result<ProblemMetadata, MetadataError> {
        let url = format!("{}/api/v3/problem/show", self.api_base);
        tracing::debug!("Requesting solved.ac metadata for problem {}", id);

        let response = self
            .client
            .get(&url)
            .query(&[("problemId", id.get())])
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|source| MetadataError::Http { id, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(MetadataError::Status {
                id,
                status: status.as_u16(),
            });
        }

        let body: ProblemResponse = response
            .json()
            .await
            .map_err(|source| MetadataError::Decode { id, source })?;

        Ok(ProblemMetadata::from_level_and_tags(
            body.level.unwrap_or(0),
            &body.tags.unwrap_or_default(),
        ))
    }
}
