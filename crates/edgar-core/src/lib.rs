//! # edgar-core
//!
//! Shared data model for the edgar-rs workspace: the filing section
//! catalogue, markup dialects, the raw-document carrier, and the error
//! taxonomy used across the extraction engine and the EDGAR HTTP clients.
//!
//! ## Quick Start
//!
//! ```rust
//! use edgar_core::{FilingDialect, RawDocument, SectionKey};
//!
//! let doc = RawDocument::new("<p>ITEM 1. Business</p>", FilingDialect::InlineMarkup);
//! assert_eq!(doc.dialect(), FilingDialect::InlineMarkup);
//!
//! // The catalogue is closed and ordinally ranked
//! assert!(SectionKey::Item1 < SectionKey::Item7A);
//! assert_eq!(SectionKey::from_canonical("item7a"), Some(SectionKey::Item7A));
//! ```

pub mod dialect;
pub mod document;
pub mod error;
pub mod section;

pub use dialect::FilingDialect;
pub use document::RawDocument;
pub use error::{EdgarError, Result};
pub use section::{Section, SectionKey, SectionMap};
