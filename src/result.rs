// src/result.rs
// =============================================================================
// The crawl result map.
//
// CrawlResult maps each canonical URL to the PageRecord built while crawling
// it. The map doubles as the visited set: a URL is "visited" exactly when it
// is a key here, and registration happens before a page's links are walked
// so cycles terminate.
//
// Backed by an IndexMap so iteration and persisted JSON follow insertion
// order, which keeps output deterministic across runs of the same graph.
// =============================================================================

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::SpiderError;

/// What was recorded for one crawled page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    /// Accepted links in the order they were first discovered on the page.
    /// Each distinct link appears once; first occurrence wins.
    pub urls: Vec<String>,
    /// The raw fetched body, present only when body capture is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// Map of canonical URL -> PageRecord, in insertion (crawl) order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CrawlResult {
    pages: IndexMap<String, PageRecord>,
}

impl CrawlResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `url` has already been crawled.
    pub fn contains(&self, url: &str) -> bool {
        self.pages.contains_key(url)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn get(&self, url: &str) -> Option<&PageRecord> {
        self.pages.get(url)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PageRecord)> {
        self.pages.iter()
    }

    /// Registers `url` as visited with an empty link list. Called before the
    /// page's links are processed; a URL already present is left untouched.
    pub(crate) fn register(&mut self, url: String, body: Option<String>) {
        self.pages.entry(url).or_insert(PageRecord {
            urls: Vec::new(),
            body,
        });
    }

    /// Appends `link` to `page`'s accepted list unless it is already there.
    /// Returns whether the link was appended.
    pub(crate) fn push_link(&mut self, page: &str, link: String) -> bool {
        let Some(record) = self.pages.get_mut(page) else {
            return false;
        };
        if record.urls.iter().any(|existing| *existing == link) {
            return false;
        }
        record.urls.push(link);
        true
    }

    /// The result map as pretty-printed JSON, one top-level object keyed by
    /// URL: `{ url: { "urls": [...], "body"?: "..." } }`.
    pub fn to_json(&self) -> Result<String, SpiderError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Persists the result map to `path`. The in-memory map is untouched
    /// either way, so a failed save loses nothing.
    pub fn save_to(&self, path: &Path) -> Result<(), SpiderError> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|source| SpiderError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), pages = self.len(), "saved crawl results");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_link_dedupes_within_a_page() {
        let mut result = CrawlResult::new();
        result.register("http://example.com".to_string(), None);

        assert!(result.push_link("http://example.com", "http://duplicate.com".to_string()));
        assert!(!result.push_link("http://example.com", "http://duplicate.com".to_string()));

        let record = result.get("http://example.com").unwrap();
        assert_eq!(record.urls, vec!["http://duplicate.com"]);
    }

    #[test]
    fn test_push_link_to_unknown_page_is_a_no_op() {
        let mut result = CrawlResult::new();
        assert!(!result.push_link("http://missing.com", "http://example.com".to_string()));
    }

    #[test]
    fn test_register_does_not_overwrite() {
        let mut result = CrawlResult::new();
        result.register("http://example.com".to_string(), None);
        result.push_link("http://example.com", "http://example.com/test".to_string());

        result.register("http://example.com".to_string(), Some("late".to_string()));

        let record = result.get("http://example.com").unwrap();
        assert_eq!(record.urls, vec!["http://example.com/test"]);
        assert_eq!(record.body, None);
    }

    #[test]
    fn test_json_preserves_insertion_order() {
        let mut result = CrawlResult::new();
        result.register("http://example.com/z".to_string(), None);
        result.register("http://example.com/a".to_string(), None);

        let json = result.to_json().unwrap();
        let z = json.find("http://example.com/z").unwrap();
        let a = json.find("http://example.com/a").unwrap();
        assert!(z < a, "keys should serialize in insertion order");
    }

    #[test]
    fn test_body_is_omitted_when_absent() {
        let mut result = CrawlResult::new();
        result.register("http://example.com".to_string(), None);

        let json = result.to_json().unwrap();
        assert!(!json.contains("\"body\""));
    }

    #[test]
    fn test_save_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        let mut result = CrawlResult::new();
        result.register("http://example.com".to_string(), None);
        result.push_link("http://example.com", "http://example.com/test".to_string());

        result.save_to(&path).unwrap();
        let first = fs::read(&path).unwrap();
        result.save_to(&path).unwrap();
        let second = fs::read(&path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_save_to_unwritable_destination_fails_but_keeps_result() {
        let mut result = CrawlResult::new();
        result.register("http://example.com".to_string(), None);

        let err = result
            .save_to(Path::new("/nonexistent-dir/out.json"))
            .unwrap_err();
        assert!(matches!(err, SpiderError::Write { .. }));
        assert_eq!(result.len(), 1);
    }
}
