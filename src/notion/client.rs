//! Notion REST client
//!
//! Covers the endpoints the tool needs: list block children, create and
//! archive a page, append block children, and `users/me`.

use crate::config::NotionConfig;
use crate::fetch::build_http_client;
use crate::notion::publish::page_url;
use crate::notion::{BotUser, ChildPage, CreatedPage, DocumentStore, NotionError, PageDraft, RichText};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

/// Notion accepts at most this many children per request
const MAX_CHILDREN_PER_REQUEST: usize = 100;

#[derive(Debug, Deserialize)]
struct BlockList {
    #[serde(default)]
    results: Vec<BlockObject>,
    #[serde(default)]
    has_more: bool,
    #[serde(default)]
    next_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BlockObject {
    id: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    child_page: Option<ChildPageTitle>,
}

#[derive(Debug, Deserialize)]
struct ChildPageTitle {
    #[serde(default)]
    title: String,
}

#[derive(Debug, Deserialize)]
struct PageObject {
    id: String,
    #[serde(default)]
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UserObject {
    id: String,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

/// Authenticated client for the Notion API
pub struct NotionClient {
    client: Client,
    api_base: String,
    api_version: String,
    token: String,
}

impl NotionClient {
    pub fn new(config: &NotionConfig) -> Result<Self, NotionError> {
        let user_agent = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
        let client = build_http_client(user_agent, Duration::from_secs(30)).map_err(NotionError::Client)?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            api_version: config.api_version.clone(),
            token: config.token.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/v1/{}", self.api_base, path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .bearer_auth(&self.token)
            .header("Notion-Version", &self.api_version)
    }

    /// Sends `request` and decodes a successful JSON body as `T`
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder, endpoint: &str) -> Result<T, NotionError> {
        let response = self
            .authorized(request)
            .send()
            .await
            .map_err(|source| NotionError::Http {
                endpoint: endpoint.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let body: ApiErrorBody = serde_json::from_str(&text).unwrap_or_else(|_| ApiErrorBody {
                code: "unknown".to_string(),
                message: text,
            });
            return Err(NotionError::Api {
                status: status.as_u16(),
                code: body.code,
                message: body.message,
            });
        }

        response.json().await.map_err(|source| NotionError::Decode {
            endpoint: endpoint.to_string(),
            source,
        })
    }

    /// Appends `children` to an existing block in batches
    async fn append_children(&self, block_id: &str, children: &[Value]) -> Result<(), NotionError> {
        let endpoint = self.endpoint(&format!("blocks/{}/children", block_id));

        for batch in children.chunks(MAX_CHILDREN_PER_REQUEST) {
            tracing::debug!("Appending {} blocks to {}", batch.len(), block_id);
            let request = self
                .client
                .patch(&endpoint)
                .json(&json!({ "children": batch }));
            let _: Value = self.send(request, &endpoint).await?;
        }

        Ok(())
    }

    /// Moves a page to the trash so it no longer shows up as a child page
    async fn archive_page(&self, page_id: &str) -> Result<(), NotionError> {
        let endpoint = self.endpoint(&format!("pages/{}", page_id));
        let request = self
            .client
            .patch(&endpoint)
            .json(&json!({ "archived": true }));
        let _: Value = self.send(request, &endpoint).await?;
        Ok(())
    }
}

impl DocumentStore for NotionClient {
    async fn list_child_pages(&self, parent_id: &str) -> Result<Vec<ChildPage>, NotionError> {
        let endpoint = self.endpoint(&format!("blocks/{}/children", parent_id));
        let mut pages = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let mut request = self
                .client
                .get(&endpoint)
                .query(&[("page_size", MAX_CHILDREN_PER_REQUEST.to_string())]);
            if let Some(cursor) = &cursor {
                request = request.query(&[("start_cursor", cursor)]);
            }

            let list: BlockList = self.send(request, &endpoint).await?;
            pages.extend(list.results.into_iter().filter_map(|block| {
                match (block.kind.as_str(), block.child_page) {
                    ("child_page", Some(child)) => Some(ChildPage {
                        id: block.id,
                        title: child.title,
                    }),
                    _ => None,
                }
            }));

            match list.next_cursor {
                Some(next) if list.has_more => cursor = Some(next),
                _ => break,
            }
        }

        tracing::debug!("Parent {} has {} child pages", parent_id, pages.len());
        Ok(pages)
    }

    async fn create_page(&self, parent_id: &str, draft: &PageDraft) -> Result<CreatedPage, NotionError> {
        let endpoint = self.endpoint("pages");
        let children: Vec<Value> = draft.blocks.iter().map(|b| b.to_json()).collect();
        let (first, rest) = children.split_at(children.len().min(MAX_CHILDREN_PER_REQUEST));

        let body = json!({
            "parent": { "page_id": parent_id },
            "icon": { "type": "emoji", "emoji": draft.icon },
            "properties": {
                "title": { "title": [RichText::plain(draft.title.as_str()).to_json()] }
            },
            "children": first,
        });

        let page: PageObject = self
            .send(self.client.post(&endpoint).json(&body), &endpoint)
            .await?;

        if !rest.is_empty() {
            if let Err(e) = self.append_children(&page.id, rest).await {
                tracing::warn!("Appending blocks to {} failed, archiving the partial page", page.id);
                if let Err(archive_err) = self.archive_page(&page.id).await {
                    tracing::error!("Failed to archive partial page {}: {}", page.id, archive_err);
                }
                return Err(e);
            }
        }

        let url = page.url.unwrap_or_else(|| page_url(&page.id));
        Ok(CreatedPage { id: page.id, url })
    }

    async fn current_user(&self) -> Result<BotUser, NotionError> {
        let endpoint = self.endpoint("users/me");
        let user: UserObject = self.send(self.client.get(&endpoint), &endpoint).await?;
        Ok(BotUser {
            id: user.id,
            name: user.name,
        })
    }
}
