// src/extract.rs
// =============================================================================
// Link extraction.
//
// Parses an HTML body with the `scraper` crate and returns the href value of
// every anchor, in document order, exactly as written. No validation, no
// resolution, no deduplication - that is all the traversal engine's job.
// =============================================================================

use scraper::{Html, Selector};

/// Returns the raw `href` of every `<a href=...>` in the body, in document
/// order. Duplicates and malformed values are passed through untouched.
pub fn extract_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    // Constant selector, known to be valid.
    let selector = Selector::parse("a[href]").unwrap();

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect()
}
