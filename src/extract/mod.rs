//! Field extraction from Baekjoon problem pages
//!
//! Every field is located with a fixed selector. A selector that matches
//! nothing yields an empty string or list; extraction itself never fails.

mod examples;
mod text;

pub use examples::scan_examples;
pub use text::clean_text;

use crate::problem::{Limits, ProblemPage, Section, UNTITLED};
use crate::url::normalize_image_url;
use scraper::{ElementRef, Html, Selector};
use text::{inline_text, section_text};

/// Parses a problem page into its fields
///
/// # Arguments
///
/// * `html` - Rendered page source
/// * `origin` - Site origin used to absolutise relative image URLs
///
/// # Example
///
/// ```
/// use boj_notion::extract::parse_problem_page;
///
/// let html = r#"<span id="problem_title">A+B</span>"#;
/// let page = parse_problem_page(html, "https://www.acmicpc.net");
/// assert_eq!(page.title, "A+B");
/// assert!(page.examples.is_empty());
/// ```
pub fn parse_problem_page(html: &str, origin: &str) -> ProblemPage {
    let document = Html::parse_document(html);

    let title = select_first(&document, "#problem_title")
        .map(inline_text)
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| UNTITLED.to_string());

    ProblemPage {
        title,
        limits: extract_limits(&document),
        description: extract_section(&document, "#problem_description", origin),
        input: extract_section(&document, "#problem_input", origin),
        output: extract_section(&document, "#problem_output", origin),
        examples: scan_examples(&document).collect(),
    }
}

fn select_first<'a>(document: &'a Html, selector: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(selector).ok()?;
    document.select(&selector).next()
}

/// Reads the first row of the `#problem-info` table
fn extract_limits(document: &Html) -> Limits {
    let Some(row) = select_first(document, "#problem-info tbody tr") else {
        return Limits::default();
    };
    let Ok(cell_selector) = Selector::parse("td") else {
        return Limits::default();
    };

    let mut cells = row.select(&cell_selector).map(inline_text);
    let mut next = || cells.next().unwrap_or_default();

    Limits {
        time_limit: next(),
        memory_limit: next(),
        submissions: next(),
        accepted: next(),
        solvers: next(),
        accuracy: next(),
    }
}

fn extract_section(document: &Html, selector: &str, origin: &str) -> Section {
    match select_first(document, selector) {
        Some(element) => Section {
            text: section_text(element),
            images: extract_images(element, origin),
        },
        None => Section::default(),
    }
}

/// Absolute URLs of every `<img>` with a non-empty `src` under `element`
fn extract_images(element: ElementRef<'_>, origin: &str) -> Vec<String> {
    let Ok(img_selector) = Selector::parse("img[src]") else {
        return Vec::new();
    };

    element
        .select(&img_selector)
        .filter_map(|img| img.value().attr("src"))
        .map(str::trim)
        .filter(|src| !src.is_empty())
        .map(|src| normalize_image_url(src, origin))
        .collect()
}
