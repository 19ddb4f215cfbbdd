// src/error.rs
// =============================================================================
// Error taxonomy for the crawler.
//
// Only two kinds of failure are fatal enough to surface as errors:
// - configuration conflicts, caught at construction before any network call
// - persistence failures, after the traversal has already completed
//
// Everything that goes wrong *during* a crawl (bad links, unreachable pages,
// revisits) is recoverable and reported as a CrawlEvent instead.
// =============================================================================

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpiderError {
    /// `internal_only` and `external_only` are mutually exclusive.
    #[error("`internal_only` and `external_only` cannot both be set")]
    ConflictingScopeFilters,

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    /// The crawl result could not be serialized to JSON.
    #[error("failed to serialize crawl results")]
    Serialize(#[from] serde_json::Error),

    /// The crawl result could not be written to the save destination.
    /// The in-memory result is still valid when this is returned.
    #[error("failed to write crawl results to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
