//! # edgar-extract
//!
//! Section extraction engine for SEC EDGAR filings. Given the raw markup of
//! a filing, locates the boundaries of its numbered item sections and
//! returns each section's content as normalized markup plus plain text.
//!
//! Filing markup is adversarial to naive matching: headers appear in
//! multiple casings and spacings, are duplicated in tables of contents,
//! carry encoding artifacts, and restate themselves ("Item 7 (continued)")
//! without starting a new section. The engine reconstructs a single,
//! non-overlapping, correctly ordered partition of the document from that
//! noise in five stages: scan, canonicalize, disambiguate, reconcile,
//! slice.
//!
//! The engine is a pure synchronous computation over an in-memory buffer:
//! no I/O, no shared state, no caching across calls. Concurrent invocations
//! need no coordination.
//!
//! ## Quick Start
//!
//! ```rust
//! use edgar_core::{FilingDialect, RawDocument, SectionKey};
//! use edgar_extract::SectionExtractor;
//!
//! let doc = RawDocument::new(
//!     "<p>ITEM 1. Business</p> we make things <p>ITEM 2. Properties</p> a plant",
//!     FilingDialect::InlineMarkup,
//! );
//! let sections = SectionExtractor::new().extract(&doc).unwrap();
//!
//! assert!(sections[&SectionKey::Item1].text.contains("we make things"));
//! assert!(sections[&SectionKey::Item2].text.contains("a plant"));
//! ```

mod canonical;
mod disambiguate;
mod reconcile;
mod scan;
mod slice;

pub mod clean;
pub mod tagger;

pub use clean::{CleanedMarkup, DefaultCleaner, MarkupCleaner};
pub use reconcile::ResolvedBoundary;
pub use tagger::{tag_sections, EntityTagger};

use edgar_core::{RawDocument, Result, SectionKey, SectionMap};
use std::collections::BTreeSet;

/// Lookahead window, in bytes, searched for a "(continued)" marker after an
/// upper-case header occurrence.
pub const DEFAULT_LOOKAHEAD_BYTES: usize = 256;

/// The section extraction engine.
///
/// Stateless across calls; build one and reuse it for any number of
/// documents, from any number of threads.
pub struct SectionExtractor {
    lookahead_bytes: usize,
    extracted: BTreeSet<SectionKey>,
    cleaner: Box<dyn MarkupCleaner + Send + Sync>,
}

impl SectionExtractor {
    /// Create an extractor with default settings: the standard extracted
    /// subset, a 256-byte continuation lookahead, and the built-in cleaner.
    #[must_use = "returns a configured extractor"]
    pub fn new() -> Self {
        Self {
            lookahead_bytes: DEFAULT_LOOKAHEAD_BYTES,
            extracted: SectionKey::EXTRACTED.into_iter().collect(),
            cleaner: Box::new(DefaultCleaner),
        }
    }

    /// Create a builder for custom configuration.
    #[must_use = "returns an extractor builder"]
    pub fn builder() -> SectionExtractorBuilder {
        SectionExtractorBuilder::new()
    }

    /// Extract the caller-visible sections of `doc`.
    ///
    /// A document with no recognizable headers yields an empty map; that is
    /// a valid outcome, not an error.
    ///
    /// # Errors
    ///
    /// Only a failing markup cleaner aborts extraction; the built-in
    /// cleaner never does.
    pub fn extract(&self, doc: &RawDocument) -> Result<SectionMap> {
        let boundaries = self.resolve_boundaries(doc);
        slice::slice_sections(doc, &boundaries, &self.extracted, self.cleaner.as_ref())
    }

    /// Resolve the full boundary list of `doc`, including anchor-only keys
    /// that produce no output section.
    ///
    /// Boundaries are strictly increasing in start offset; together with
    /// the prefix before the first boundary they partition the document.
    #[must_use = "returns the resolved section boundaries"]
    pub fn resolve_boundaries(&self, doc: &RawDocument) -> Vec<ResolvedBoundary> {
        let text = doc.content();
        let candidates: Vec<_> = scan::scan_headers(text)
            .filter_map(|m| canonical::canonicalize(&m))
            .collect();
        log::debug!("{} header candidates after canonicalization", candidates.len());

        let kept = disambiguate::filter_candidates(&candidates, text, self.lookahead_bytes);
        reconcile::reconcile(kept, &candidates)
    }
}

impl Default for SectionExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for configuring a [`SectionExtractor`].
pub struct SectionExtractorBuilder {
    lookahead_bytes: usize,
    extracted: BTreeSet<SectionKey>,
    cleaner: Box<dyn MarkupCleaner + Send + Sync>,
}

impl SectionExtractorBuilder {
    /// Create a new builder with default settings.
    #[must_use = "returns an extractor builder"]
    pub fn new() -> Self {
        Self {
            lookahead_bytes: DEFAULT_LOOKAHEAD_BYTES,
            extracted: SectionKey::EXTRACTED.into_iter().collect(),
            cleaner: Box::new(DefaultCleaner),
        }
    }

    /// Set the continuation-marker lookahead window in bytes.
    ///
    /// Default: [`DEFAULT_LOOKAHEAD_BYTES`]
    #[must_use = "builder methods return the builder"]
    pub fn lookahead_bytes(mut self, bytes: usize) -> Self {
        self.lookahead_bytes = bytes;
        self
    }

    /// Override which catalogue keys are returned to the caller. Keys
    /// outside the set still anchor span edges for their neighbors.
    #[must_use = "builder methods return the builder"]
    pub fn extracted(mut self, keys: impl IntoIterator<Item = SectionKey>) -> Self {
        self.extracted = keys.into_iter().collect();
        self
    }

    /// Substitute a custom markup cleaner.
    #[must_use = "builder methods return the builder"]
    pub fn cleaner(mut self, cleaner: Box<dyn MarkupCleaner + Send + Sync>) -> Self {
        self.cleaner = cleaner;
        self
    }

    /// Build the extractor.
    #[must_use = "returns the configured extractor"]
    pub fn build(self) -> SectionExtractor {
        SectionExtractor {
            lookahead_bytes: self.lookahead_bytes,
            extracted: self.extracted,
            cleaner: self.cleaner,
        }
    }
}

impl Default for SectionExtractorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
