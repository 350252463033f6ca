//! Maps a problem record onto Notion page content
//!
//! The layout is fixed: tag and link callouts, the limits table, one section
//! each for the statement, input and output, the samples, and an empty
//! solution section to fill in by hand.

use crate::config::SiteConfig;
use crate::notion::blocks::{Block, RichText, MAX_BLOCK_CHARS};
use crate::problem::{ProblemRecord, Section};
use crate::solved::{Rank, Tier};

const LIMIT_HEADERS: [&str; 6] = ["시간 제한", "메모리 제한", "제출", "정답", "맞힌 사람", "정답 비율"];
const SOLUTION_PLACEHOLDER: &str = "여기에 풀이를 작성하세요...";
const HEADING_COLOR: &str = "blue";
const CODE_LANGUAGE: &str = "plain text";

/// Title, icon and blocks of a page about to be created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDraft {
    pub title: String,
    pub icon: &'static str,
    pub blocks: Vec<Block>,
}

/// Splits long text into chunks of at most `max_len` characters
///
/// Each cut is made just before the last newline inside the window, or hard
/// at `max_len` when the window has none. Newlines at the start of the
/// remainder are dropped. Empty input yields one empty chunk.
///
/// # Examples
///
/// ```
/// use boj_notion::notion::split_text;
///
/// assert_eq!(split_text("", 2000), vec![""]);
/// assert_eq!(split_text("ab\ncd", 4), vec!["ab", "cd"]);
/// assert_eq!(split_text("abcdef", 4), vec!["abcd", "ef"]);
/// ```
pub fn split_text(text: &str, max_len: usize) -> Vec<String> {
    if text.is_empty() {
        return vec![String::new()];
    }

    let max_len = max_len.max(1);
    let mut chunks = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let Some((limit, _)) = rest.char_indices().nth(max_len) else {
            chunks.push(rest.to_string());
            break;
        };

        let split_at = rest[..limit].rfind('\n').unwrap_or(limit);
        chunks.push(rest[..split_at].to_string());
        rest = rest[split_at..].trim_start_matches('\n');
    }

    chunks
}

/// Korean rank names used in page titles
const RANK_NAMES_KO: [(&str, &str); 6] = [
    ("Bronze", "브론즈"),
    ("Silver", "실버"),
    ("Gold", "골드"),
    ("Platinum", "플래티넘"),
    ("Diamond", "다이아몬드"),
    ("Ruby", "루비"),
];

/// Translates rank names in a tier label word by word
///
/// `Silver I` becomes `실버 I`; words without a translation are kept.
pub fn localize_tier(label: &str) -> String {
    label
        .split(' ')
        .map(|word| {
            RANK_NAMES_KO
                .iter()
                .find(|(en, _)| *en == word)
                .map(|(_, ko)| *ko)
                .unwrap_or(word)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Page icon for a tier
pub fn tier_icon(tier: Tier) -> &'static str {
    match tier {
        Tier::Unrated => "❓",
        Tier::Ranked { rank, .. } => match rank {
            Rank::Bronze => "🥉",
            Rank::Silver => "🥈",
            Rank::Gold => "🥇",
            Rank::Platinum => "💎",
            Rank::Diamond => "💠",
            Rank::Ruby => "💎",
        },
        Tier::Unknown => "🥚",
    }
}

/// `[<site> <tier>] <id>: <title>`, e.g. `[백준 실버 I] 14716: 현수막`
pub fn page_title(record: &ProblemRecord, site_name: &str) -> String {
    format!(
        "[{} {}] {}: {}",
        site_name,
        localize_tier(&record.tier.to_string()),
        record.id,
        record.title
    )
}

/// Builds the full page for `record`
pub fn assemble_page(record: &ProblemRecord, site: &SiteConfig) -> PageDraft {
    let mut blocks = Vec::new();

    if !record.tags.is_empty() {
        let tag_line = record
            .tags
            .iter()
            .map(|tag| format!("#{}", tag))
            .collect::<Vec<_>>()
            .join(" | ");
        blocks.push(Block::Callout {
            text: vec![RichText::plain(tag_line)],
            emoji: "🏷️",
            color: "purple_background",
        });
    }

    blocks.push(Block::Callout {
        text: vec![
            RichText::plain(format!("{}\n", site.host())),
            RichText::link(record.url.as_str(), record.url.as_str()),
        ],
        emoji: "🔗",
        color: "gray_background",
    });
    blocks.push(Block::Divider);

    blocks.push(Block::Table {
        rows: vec![
            LIMIT_HEADERS.iter().map(|h| h.to_string()).collect(),
            record.limits.cells().iter().map(|c| c.to_string()).collect(),
        ],
    });

    push_section(&mut blocks, "📋 문제", &record.description);
    push_section(&mut blocks, "📥 입력", &record.input);
    push_section(&mut blocks, "📤 출력", &record.output);

    push_heading(&mut blocks, "💻 예제");
    for (i, example) in record.examples.iter().enumerate() {
        let n = i + 1;
        blocks.push(Block::Heading3(format!("예제 입력 {}", n)));
        blocks.push(Block::Code {
            content: example.input.clone(),
            language: CODE_LANGUAGE,
        });
        blocks.push(Block::Heading3(format!("예제 출력 {}", n)));
        blocks.push(Block::Code {
            content: example.output.clone(),
            language: CODE_LANGUAGE,
        });
    }

    push_heading(&mut blocks, "✏️ 풀이");
    blocks.push(Block::Paragraph(SOLUTION_PLACEHOLDER.to_string()));

    PageDraft {
        title: page_title(record, &site.name),
        icon: tier_icon(record.tier),
        blocks,
    }
}

/// Divider followed by a coloured level-2 heading
fn push_heading(blocks: &mut Vec<Block>, heading: &str) {
    blocks.push(Block::Divider);
    blocks.push(Block::Heading2(RichText::colored(heading, HEADING_COLOR)));
}

fn push_section(blocks: &mut Vec<Block>, heading: &str, section: &Section) {
    push_heading(blocks, heading);
    blocks.extend(
        split_text(&section.text, MAX_BLOCK_CHARS)
            .into_iter()
            .map(Block::Paragraph),
    );
    blocks.extend(section.images.iter().map(|url| Block::Image { url: url.clone() }));
}
