//! Notion block model and its JSON encoding

use serde_json::{json, Value};

/// Notion rejects rich-text content longer than this many characters
pub const MAX_BLOCK_CHARS: usize = 2000;

/// A run of text, optionally linked or coloured
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RichText {
    pub content: String,
    pub link: Option<String>,
    pub color: Option<&'static str>,
}

impl RichText {
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            link: None,
            color: None,
        }
    }

    pub fn link(content: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            link: Some(url.into()),
            color: None,
        }
    }

    pub fn colored(content: impl Into<String>, color: &'static str) -> Self {
        Self {
            content: content.into(),
            link: None,
            color: Some(color),
        }
    }

    pub fn to_json(&self) -> Value {
        let mut text = json!({ "content": self.content });
        if let Some(url) = &self.link {
            text["link"] = json!({ "url": url });
        }

        let mut value = json!({ "type": "text", "text": text });
        if let Some(color) = self.color {
            value["annotations"] = json!({ "color": color });
        }
        value
    }
}

/// A content block of a Notion page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Callout {
        text: Vec<RichText>,
        emoji: &'static str,
        color: &'static str,
    },
    Divider,
    /// First row is rendered as the column header
    Table { rows: Vec<Vec<String>> },
    Heading2(RichText),
    Heading3(String),
    Paragraph(String),
    Code {
        content: String,
        language: &'static str,
    },
    /// An externally hosted image
    Image { url: String },
}

impl Block {
    /// Encodes the block in the shape the Notion API expects
    pub fn to_json(&self) -> Value {
        match self {
            Block::Callout { text, emoji, color } => json!({
                "object": "block",
                "type": "callout",
                "callout": {
                    "rich_text": text.iter().map(RichText::to_json).collect::<Vec<_>>(),
                    "icon": { "type": "emoji", "emoji": emoji },
                    "color": color,
                }
            }),
            Block::Divider => json!({ "object": "block", "type": "divider", "divider": {} }),
            Block::Table { rows } => {
                let width = rows.first().map(Vec::len).unwrap_or(0);
                let rows: Vec<Value> = rows
                    .iter()
                    .map(|row| {
                        let cells: Vec<Value> = row
                            .iter()
                            .map(|cell| json!([RichText::plain(cell.as_str()).to_json()]))
                            .collect();
                        json!({
                            "object": "block",
                            "type": "table_row",
                            "table_row": { "cells": cells }
                        })
                    })
                    .collect();
                json!({
                    "object": "block",
                    "type": "table",
                    "table": {
                        "table_width": width,
                        "has_column_header": true,
                        "has_row_header": false,
                        "children": rows,
                    }
                })
            }
            Block::Heading2(text) => json!({
                "object": "block",
                "type": "heading_2",
                "heading_2": { "rich_text": [text.to_json()] }
            }),
            Block::Heading3(text) => json!({
                "object": "block",
                "type": "heading_3",
                "heading_3": { "rich_text": [RichText::plain(text.as_str()).to_json()] }
            }),
            Block::Paragraph(text) => json!({
                "object": "block",
                "type": "paragraph",
                "paragraph": { "rich_text": [RichText::plain(text.as_str()).to_json()] }
            }),
            Block::Code { content, language } => {
                let segments: Vec<Value> = chunk_chars(content, MAX_BLOCK_CHARS)
                    .into_iter()
                    .map(|segment| RichText::plain(segment).to_json())
                    .collect();
                json!({
                    "object": "block",
                    "type": "code",
                    "code": { "rich_text": segments, "language": language }
                })
            }
            Block::Image { url } => json!({
                "object": "block",
                "type": "image",
                "image": { "type": "external", "external": { "url": url } }
            }),
        }
    }
}

/// Splits `text` into pieces of at most `max` characters without dropping any
///
/// An empty string yields a single empty piece.
pub fn chunk_chars(text: &str, max: usize) -> Vec<&str> {
    let max = max.max(1);
    let mut pieces = Vec::new();
    let mut rest = text;

    while let Some((index, _)) = rest.char_indices().nth(max) {
        let (head, tail) = rest.split_at(index);
        pieces.push(head);
        rest = tail;
    }
    pieces.push(rest);

    pieces
}
