//! Filing document retrieval.

use crate::rate_limit::RateLimitTracker;
use edgar_core::{EdgarError, FilingDialect, RawDocument, Result};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;

/// User agent sent to the EDGAR servers. EDGAR's fair-access policy
/// requires an identifying agent with a contact address; override it with
/// [`DocumentFetcher::with_user_agent`] for production use.
pub const DEFAULT_USER_AGENT: &str = "edgar_rs admin@example.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Retrieves filing documents from the EDGAR archive.
///
/// The fetcher validates that a URL points at a parseable document before
/// any request is made, blocks on the shared rate limiter, and maps HTTP
/// failures onto the [`EdgarError`] taxonomy. Response bodies are served
/// gzip-compressed by EDGAR and decompressed transparently.
#[derive(Debug, Clone)]
pub struct DocumentFetcher {
    client: Client,
    limiter: RateLimitTracker,
}

impl DocumentFetcher {
    /// Create a fetcher sharing `limiter` with other EDGAR clients.
    ///
    /// # Errors
    ///
    /// Returns [`EdgarError::Connection`] if the HTTP client cannot be
    /// constructed.
    pub fn new(limiter: RateLimitTracker) -> Result<Self> {
        Self::with_user_agent(limiter, DEFAULT_USER_AGENT)
    }

    /// Create a fetcher with a custom identifying user agent.
    ///
    /// # Errors
    ///
    /// Returns [`EdgarError::Connection`] if the HTTP client cannot be
    /// constructed.
    pub fn with_user_agent(limiter: RateLimitTracker, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| EdgarError::Connection(e.to_string()))?;
        Ok(Self { client, limiter })
    }

    /// Fetch a filing document and wrap it with its detected dialect.
    ///
    /// # Errors
    ///
    /// - [`EdgarError::UnsupportedDocument`] when the URL extension is not
    ///   a parseable dialect; checked before any request and never retried.
    /// - [`EdgarError::NotFound`] for 404 responses.
    /// - [`EdgarError::Server`] for other non-success statuses.
    /// - [`EdgarError::Connection`] when the server is unreachable.
    /// - [`EdgarError::Decode`] when the body cannot be decoded.
    pub fn fetch(&self, url: &str) -> Result<RawDocument> {
        let dialect = FilingDialect::from_url(url)
            .ok_or_else(|| EdgarError::UnsupportedDocument(url.to_string()))?;

        self.limiter.acquire();
        log::debug!("fetching {dialect} filing from {url}");

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| EdgarError::Connection(e.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(EdgarError::NotFound(url.to_string())),
            status if !status.is_success() => Err(EdgarError::Server(status.as_u16())),
            _ => {
                let body = response
                    .text()
                    .map_err(|e| EdgarError::Decode(e.to_string()))?;
                Ok(RawDocument::new(body, dialect))
            }
        }
    }
}
