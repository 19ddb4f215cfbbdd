// src/spider.rs
// =============================================================================
// The traversal engine.
//
// How it works:
// 1. Start with the root URL on an explicit work stack
// 2. Pop a URL; skip it if invalid or already crawled
// 3. Fetch it; an unreachable page gets no result entry at all
// 4. Register the page in the result map BEFORE walking its links, so
//    self-references and cycles hit the already-crawled check and terminate
// 5. Validate, scope-filter, regex-filter and dedup each candidate link,
//    record the survivors on the page, and schedule them while the global
//    visit cap is unreached
//
// Children are pushed in reverse so pop order matches discovery order,
// which keeps the depth-first visitation of a plain recursive walk without
// its unbounded call depth.
// =============================================================================

use tracing::{debug, warn};
use url::Url;

use crate::config::SpiderConfig;
use crate::error::SpiderError;
use crate::event::CrawlEvent;
use crate::extract::extract_links;
use crate::fetch::{Fetcher, HttpFetcher};
use crate::result::CrawlResult;

/// Whether `raw` is a well-formed absolute http(s) URL with a host.
/// Makes no network call.
pub fn validate_url(raw: &str) -> bool {
    match Url::parse(raw) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.has_host(),
        Err(_) => false,
    }
}

/// A single-site crawler: fetches pages, follows their links depth-first,
/// and accumulates one PageRecord per reachable URL.
#[derive(Debug)]
pub struct Spider<F = HttpFetcher> {
    config: SpiderConfig,
    /// Host of the root URL, if it parses. Drives the internal/external split.
    root_host: Option<String>,
    fetcher: F,
    result: CrawlResult,
    events: Vec<CrawlEvent>,
}

impl Spider<HttpFetcher> {
    /// Builds a crawler with the production HTTP fetcher.
    pub fn new(config: SpiderConfig) -> Result<Self, SpiderError> {
        let fetcher = HttpFetcher::new().map_err(SpiderError::Client)?;
        Self::with_fetcher(config, fetcher)
    }
}

impl<F: Fetcher> Spider<F> {
    /// Builds a crawler with a caller-supplied fetcher. Rejects conflicting
    /// scope flags here, before any network activity.
    pub fn with_fetcher(config: SpiderConfig, fetcher: F) -> Result<Self, SpiderError> {
        if config.internal_only && config.external_only {
            return Err(SpiderError::ConflictingScopeFilters);
        }

        let root_host = Url::parse(&config.root_url)
            .ok()
            .and_then(|url| url.host_str().map(str::to_string));

        Ok(Self {
            config,
            root_host,
            fetcher,
            result: CrawlResult::new(),
            events: Vec::new(),
        })
    }

    /// Crawls the root URL, then persists the result map if a save
    /// destination is configured. Persistence failure is returned to the
    /// caller; the in-memory result stays available either way.
    pub async fn start(&mut self) -> Result<(), SpiderError> {
        let root = self.config.root_url.clone();
        self.crawl(&root).await;

        if let Some(path) = self.config.save_destination.clone() {
            self.result.save_to(&path)?;
        }
        Ok(())
    }

    /// Crawls `url` and everything transitively reachable from it, subject
    /// to the visit cap. Never fails: every per-URL problem is recorded as
    /// a CrawlEvent and the traversal moves on.
    pub async fn crawl(&mut self, url: &str) {
        let mut frontier = vec![url.to_string()];

        while let Some(url) = frontier.pop() {
            if self.cap_reached() {
                debug!(cap = ?self.config.max_visits, "visit cap reached, stopping traversal");
                break;
            }

            if !validate_url(&url) {
                debug!(%url, "invalid url to crawl");
                self.events.push(CrawlEvent::InvalidUrl { url });
                continue;
            }

            if self.result.contains(&url) {
                debug!(%url, "url already crawled");
                self.events.push(CrawlEvent::AlreadyCrawled { url });
                continue;
            }

            let fetched = self.fetcher.fetch(&url).await;
            let body = match fetched {
                Ok(response) if (200..300).contains(&response.status) => response.body,
                Ok(response) => {
                    warn!(%url, status = response.status, "fetch returned non-success status");
                    self.events.push(CrawlEvent::FetchFailed {
                        url,
                        reason: format!("HTTP {}", response.status),
                    });
                    continue;
                }
                Err(err) => {
                    warn!(%url, error = %err, "fetch failed");
                    self.events.push(CrawlEvent::FetchFailed {
                        url,
                        reason: err.to_string(),
                    });
                    continue;
                }
            };

            // Register before walking links: a page linking to itself must
            // see itself as already crawled.
            let captured = self.config.capture_body.then(|| body.clone());
            self.result.register(url.clone(), captured);

            let mut scheduled = Vec::new();
            for candidate in extract_links(&body) {
                if !self.accept(&url, &candidate) {
                    continue;
                }
                if !self.result.push_link(&url, candidate.clone()) {
                    // Duplicate within this page; first occurrence won.
                    continue;
                }
                // The cap stops the walk from expanding, but the page in
                // progress still records all of its accepted links above.
                if !self.cap_reached() {
                    scheduled.push(candidate);
                }
            }
            frontier.extend(scheduled.into_iter().rev());
        }
    }

    /// Runs a candidate link through validation, the scope filter, and the
    /// regex filter. Rejections from the first two are logged and recorded
    /// as events; regex rejection is silent selection.
    fn accept(&mut self, page: &str, candidate: &str) -> bool {
        if !validate_url(candidate) {
            debug!(url = %candidate, %page, "invalid url");
            self.events.push(CrawlEvent::InvalidUrl {
                url: candidate.to_string(),
            });
            return false;
        }

        if self.config.internal_only && !self.is_internal(candidate) {
            debug!(url = %candidate, "skipping external link");
            self.events.push(CrawlEvent::SkippedExternal {
                url: candidate.to_string(),
            });
            return false;
        }
        if self.config.external_only && self.is_internal(candidate) {
            debug!(url = %candidate, "skipping internal link");
            self.events.push(CrawlEvent::SkippedInternal {
                url: candidate.to_string(),
            });
            return false;
        }

        if let Some(filter) = &self.config.link_filter {
            if !filter.is_match(candidate) {
                return false;
            }
        }

        true
    }

    /// A link is internal when its host equals the root URL's host.
    fn is_internal(&self, candidate: &str) -> bool {
        let Some(root_host) = self.root_host.as_deref() else {
            return false;
        };
        Url::parse(candidate)
            .ok()
            .and_then(|url| url.host_str().map(|host| host == root_host))
            .unwrap_or(false)
    }

    fn cap_reached(&self) -> bool {
        self.config
            .max_visits
            .is_some_and(|max| self.result.len() >= max)
    }

    /// The accumulated result map.
    pub fn result(&self) -> &CrawlResult {
        &self.result
    }

    /// Consumes the crawler, yielding the result map.
    pub fn into_result(self) -> CrawlResult {
        self.result
    }

    /// Every skip and failure observed so far, in the order it happened.
    pub fn events(&self) -> &[CrawlEvent] {
        &self.events
    }

    pub fn config(&self) -> &SpiderConfig {
        &self.config
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }
}
