// src/fetch.rs
// =============================================================================
// The HTTP collaborator.
//
// The traversal engine never talks to the network directly; it goes through
// the Fetcher trait. The production implementation wraps a reqwest Client,
// and tests substitute an in-memory map of canned responses.
//
// The contract: given a URL, return (status, body) or a transport failure.
// The engine treats a non-2xx status or an Err the same way - the page is
// unreachable and gets no result entry.
// =============================================================================

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

/// A fetched page: the HTTP status code and the response body text.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

/// A transport-level fetch failure (connection refused, timeout, DNS, ...).
#[derive(Debug, Error)]
#[error("{message}")]
pub struct FetchError {
    message: String,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// Performs an HTTP GET against a URL.
#[allow(async_fn_in_trait)]
pub trait Fetcher {
    async fn fetch(&self, url: &str) -> Result<FetchResponse, FetchError>;
}

/// The production fetcher, backed by reqwest.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { client })
    }

    /// Use a caller-supplied client (custom timeout, proxy, user agent, ...).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchResponse, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(FetchResponse { status, body })
    }
}
