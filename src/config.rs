// src/config.rs
// =============================================================================
// Crawler configuration.
//
// A SpiderConfig is assembled with chainable setters and handed to
// Spider::new, after which it never changes. The scope-flag conflict
// (internal_only + external_only) is rejected when the Spider is built,
// before any network activity.
// =============================================================================

use std::path::PathBuf;

use regex::Regex;

/// Configuration for a crawl run. Immutable once the crawler starts.
#[derive(Debug, Clone)]
pub struct SpiderConfig {
    /// The single starting point of the crawl.
    pub root_url: String,
    /// Maximum number of distinct URLs the run will ever register.
    /// `None` means unlimited.
    pub max_visits: Option<usize>,
    /// File the result map is persisted to when the run completes.
    pub save_destination: Option<PathBuf>,
    /// When set, a candidate link is accepted only if the full URL matches.
    pub link_filter: Option<Regex>,
    /// Record each page's raw HTML body in its PageRecord.
    pub capture_body: bool,
    /// Accept only links on the same host as the root URL.
    pub internal_only: bool,
    /// Accept only links on hosts other than the root URL's.
    pub external_only: bool,
}

impl SpiderConfig {
    pub fn new(root_url: impl Into<String>) -> Self {
        Self {
            root_url: root_url.into(),
            max_visits: None,
            save_destination: None,
            link_filter: None,
            capture_body: false,
            internal_only: false,
            external_only: false,
        }
    }

    /// Cap the number of distinct URLs visited. `0` means unlimited.
    pub fn with_max_visits(mut self, max: usize) -> Self {
        self.max_visits = (max > 0).then_some(max);
        self
    }

    pub fn with_save_destination(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_destination = Some(path.into());
        self
    }

    pub fn with_link_filter(mut self, pattern: Regex) -> Self {
        self.link_filter = Some(pattern);
        self
    }

    pub fn with_capture_body(mut self, capture: bool) -> Self {
        self.capture_body = capture;
        self
    }

    pub fn with_internal_only(mut self, internal_only: bool) -> Self {
        self.internal_only = internal_only;
        self
    }

    pub fn with_external_only(mut self, external_only: bool) -> Self {
        self.external_only = external_only;
        self
    }
}
