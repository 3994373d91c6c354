//! # edgar-client
//!
//! HTTP collaborators for the edgar-rs workspace: rate-limited document
//! retrieval from the EDGAR archive, full-text company search, and
//! filing-history listing.
//!
//! All clients share one [`RateLimitTracker`] so a process stays inside
//! EDGAR's fair-access ceiling no matter how many components make requests.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use edgar_client::{DocumentFetcher, RateLimitTracker, SearchClient};
//!
//! # fn main() -> edgar_core::Result<()> {
//! let limiter = RateLimitTracker::default();
//! let search = SearchClient::new(limiter.clone())?;
//! let fetcher = DocumentFetcher::new(limiter)?;
//!
//! let matches = search.search("Ford Motor")?;
//! let history = search.filings(&matches[0].cik, &["10-K"], "2019-01-01", "2021-12-31")?;
//! let document = fetcher.fetch(&history.filings[0].document)?;
//! println!("retrieved {} bytes", document.len());
//! # Ok(())
//! # }
//! ```

pub mod fetch;
pub mod rate_limit;
pub mod search;

pub use fetch::DocumentFetcher;
pub use rate_limit::{RateLimitTracker, DEFAULT_MAX_REQUESTS_PER_SECOND};
pub use search::{
    format_cik, EntityMatch, FilingHistory, FilingRecord, SearchClient,
    MINIMUM_SEARCH_START_DATE,
};
