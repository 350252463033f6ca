//! In-memory `DocumentStore` for unit tests

use crate::notion::{BotUser, ChildPage, CreatedPage, DocumentStore, NotionError, PageDraft};
use std::cell::{Cell, RefCell};

#[derive(Default)]
pub(crate) struct MemoryStore {
    pub pages: RefCell<Vec<ChildPage>>,
    pub created: RefCell<Vec<(String, PageDraft)>>,
    pub list_calls: Cell<usize>,
    pub fail_listing: bool,
    pub fail_create: bool,
}

impl MemoryStore {
    pub fn with_pages(titles: &[(&str, &str)]) -> Self {
        let pages = titles
            .iter()
            .map(|(id, title)| ChildPage {
                id: id.to_string(),
                title: title.to_string(),
            })
            .collect();
        Self {
            pages: RefCell::new(pages),
            ..Self::default()
        }
    }

    pub fn create_calls(&self) -> usize {
        self.created.borrow().len()
    }
}

impl DocumentStore for MemoryStore {
    async fn list_child_pages(&self, _parent_id: &str) -> Result<Vec<ChildPage>, NotionError> {
        self.list_calls.set(self.list_calls.get() + 1);
        if self.fail_listing {
            return Err(NotionError::Api {
                status: 502,
                code: "bad_gateway".to_string(),
                message: "listing unavailable".to_string(),
            });
        }
        Ok(self.pages.borrow().clone())
    }

    async fn create_page(&self, parent_id: &str, draft: &PageDraft) -> Result<CreatedPage, NotionError> {
        if self.fail_create {
            return Err(NotionError::Api {
                status: 400,
                code: "validation_error".to_string(),
                message: "rejected".to_string(),
            });
        }

        let id = format!("00000000-0000-0000-0000-{:012}", self.create_calls() + 1);
        self.created
            .borrow_mut()
            .push((parent_id.to_string(), draft.clone()));
        self.pages.borrow_mut().push(ChildPage {
            id: id.clone(),
            title: draft.title.clone(),
        });

        Ok(CreatedPage {
            url: format!("https://www.notion.so/{}", id.replace('-', "")),
            id,
        })
    }

    async fn current_user(&self) -> Result<BotUser, NotionError> {
        Ok(BotUser {
            id: "bot".to_string(),
            name: Some("Test Bot".to_string()),
        })
    }
}
