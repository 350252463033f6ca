use crate::extract::text::inline_text;
use crate::problem::Example;
use scraper::{ElementRef, Html, Selector};

/// Lazily yields sample pairs `#sample-input-1`/`#sample-output-1`, then 2, …
///
/// Stops at the first index with no input element. A missing output element
/// gives an empty output rather than ending the scan.
pub fn scan_examples(document: &Html) -> impl Iterator<Item = Example> + '_ {
    (1usize..).map_while(move |index| example_at(document, index))
}

fn example_at(document: &Html, index: usize) -> Option<Example> {
    let input = find_by_id(document, &format!("sample-input-{}", index))?;
    let output = find_by_id(document, &format!("sample-output-{}", index));

    Some(Example {
        input: inline_text(input),
        output: output.map(inline_text).unwrap_or_default(),
    })
}

fn find_by_id<'a>(document: &'a Html, id: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(&format!("#{}", id)).ok()?;
    document.select(&selector).next()
}
