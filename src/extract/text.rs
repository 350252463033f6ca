use regex::Regex;
use scraper::ElementRef;
use std::sync::LazyLock;

static BLANK_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("blank run regex"));
static NEWLINE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("newline run regex"));

/// Collapses runs of blank lines into a single blank line and trims the ends
///
/// Idempotent: `clean_text(&clean_text(x)) == clean_text(x)`.
///
/// # Examples
///
/// ```
/// use boj_notion::extract::clean_text;
///
/// assert_eq!(clean_text("\n  first\n\n \n\nsecond \n"), "first\n\nsecond");
/// ```
pub fn clean_text(text: &str) -> String {
    let collapsed = BLANK_RUN.replace_all(text, "\n\n");
    let collapsed = NEWLINE_RUN.replace_all(&collapsed, "\n\n");
    collapsed.trim().to_string()
}

/// All text nodes under `element` joined with newlines, then cleaned
pub fn section_text(element: ElementRef<'_>) -> String {
    clean_text(&element.text().collect::<Vec<_>>().join("\n"))
}

/// All text under `element` concatenated as-is and trimmed
pub fn inline_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
