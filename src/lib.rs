// src/lib.rs
// =============================================================================
// spiderling: a tiny single-site web crawler.
//
// The pipeline:
// 1. Fetch a page over HTTP (fetch module)
// 2. Extract the raw anchor targets from its HTML (extract module)
// 3. Validate, filter, and deduplicate each candidate (spider module)
// 4. Record accepted links per page and recurse, bounded by a visit cap
// 5. Optionally persist the accumulated result map as JSON (result module)
// =============================================================================

pub mod cli;
pub mod config;
pub mod error;
pub mod event;
pub mod extract;
pub mod fetch;
pub mod result;
pub mod spider;

pub use config::SpiderConfig;
pub use error::SpiderError;
pub use event::CrawlEvent;
pub use fetch::{FetchError, FetchResponse, Fetcher, HttpFetcher};
pub use result::{CrawlResult, PageRecord};
pub use spider::Spider;
