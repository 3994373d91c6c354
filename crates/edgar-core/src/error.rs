//! Error types for filing retrieval and extraction.

use thiserror::Error;

/// Error types that can occur while retrieving or extracting a filing.
///
/// Extraction itself is tolerant by design: a document in which no section
/// headers can be found yields an empty section map, not an error. The
/// variants here cover the failures that cannot be absorbed that way, such
/// as unsupported input and transport problems talking to the EDGAR servers.
///
/// # Examples
///
/// ```rust
/// use edgar_core::{EdgarError, FilingDialect};
///
/// match FilingDialect::from_extension("docx") {
///     Some(dialect) => println!("supported: {dialect}"),
///     None => {
///         let err = EdgarError::UnsupportedDocument("report.docx".to_string());
///         eprintln!("{err}");
///     }
/// }
/// ```
#[derive(Error, Debug)]
pub enum EdgarError {
    /// The document's dialect or filename extension is not recognized.
    ///
    /// This is fatal for the call and never retried; only inline HTML
    /// filings and SGML full-submission containers can be parsed.
    #[error("parsing is not supported for this document: {0}")]
    UnsupportedDocument(String),

    /// The EDGAR server returned a non-success status other than 404.
    #[error("the EDGAR server could not process the request: HTTP {0}")]
    Server(u16),

    /// The EDGAR server could not be reached at all.
    #[error("failed to reach the EDGAR server: {0}")]
    Connection(String),

    /// The requested document does not exist in the EDGAR database.
    #[error("document does not exist in the EDGAR database: {0}")]
    NotFound(String),

    /// A server response body could not be decompressed or decoded.
    #[error("failed to decode the EDGAR server response: {0}")]
    Decode(String),

    /// Caller-supplied search input failed validation before any request
    /// was made (empty search key, malformed CIK, inverted date window).
    #[error("invalid search input: {0}")]
    InvalidInput(String),

    /// File I/O error while reading a local filing.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Type alias for [`Result<T, EdgarError>`].
pub type Result<T> = std::result::Result<T, EdgarError>;
