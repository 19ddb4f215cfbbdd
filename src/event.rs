// src/event.rs
// =============================================================================
// Typed crawl events.
//
// Every skip or failure the traversal can hit is recorded as a value, not
// just a log line, so callers (and tests) can inspect exactly what happened
// to each URL. Regex rejection is deliberately absent: it is a selection
// policy, not a fault, and leaves no trace.
// =============================================================================

/// One recoverable condition observed during a crawl.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrawlEvent {
    /// A URL (to crawl, or found on a page) was not an absolute http(s) URL.
    InvalidUrl { url: String },
    /// A URL was already present in the result map and was not re-fetched.
    AlreadyCrawled { url: String },
    /// A fetch returned a non-2xx status or failed at the transport level.
    /// No result entry exists for this URL.
    FetchFailed { url: String, reason: String },
    /// An external link was dropped because `internal_only` is set.
    SkippedExternal { url: String },
    /// An internal link was dropped because `external_only` is set.
    SkippedInternal { url: String },
}

impl CrawlEvent {
    /// The URL this event is about.
    pub fn url(&self) -> &str {
        match self {
            CrawlEvent::InvalidUrl { url }
            | CrawlEvent::AlreadyCrawled { url }
            | CrawlEvent::FetchFailed { url, .. }
            | CrawlEvent::SkippedExternal { url }
            | CrawlEvent::SkippedInternal { url } => url,
        }
    }
}
