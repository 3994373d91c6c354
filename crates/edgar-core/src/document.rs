//! The raw filing document handed to the extraction engine.

use crate::dialect::FilingDialect;
use crate::error::{EdgarError, Result};
use std::path::Path;

/// An immutable filing document buffer plus its markup dialect.
///
/// Constructed once per extraction call and read-only for the engine's
/// duration; the engine keeps no state across documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    content: String,
    dialect: FilingDialect,
}

impl RawDocument {
    /// Wrap already-retrieved document content.
    #[inline]
    pub fn new(content: impl Into<String>, dialect: FilingDialect) -> Self {
        Self {
            content: content.into(),
            dialect,
        }
    }

    /// Read a filing from a local file, detecting the dialect from the
    /// extension.
    ///
    /// # Errors
    ///
    /// Returns [`EdgarError::UnsupportedDocument`] for unrecognized
    /// extensions (checked before any I/O) and [`EdgarError::Io`] if the
    /// file cannot be read.
    pub fn from_path(path: &Path) -> Result<Self> {
        let dialect = FilingDialect::from_path(path)
            .ok_or_else(|| EdgarError::UnsupportedDocument(path.display().to_string()))?;
        let content = std::fs::read_to_string(path)?;
        Ok(Self { content, dialect })
    }

    /// The raw document text.
    #[inline]
    #[must_use = "returns the document content"]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The markup dialect of this document.
    #[inline]
    #[must_use = "returns the document dialect"]
    pub const fn dialect(&self) -> FilingDialect {
        self.dialect
    }

    /// Length of the document in bytes.
    #[inline]
    #[must_use = "returns the document length in bytes"]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Whether the document is empty.
    #[inline]
    #[must_use = "returns whether the document is empty"]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_new_preserves_content_and_dialect() {
        let doc = RawDocument::new("<html></html>", FilingDialect::InlineMarkup);
        assert_eq!(doc.content(), "<html></html>");
        assert_eq!(doc.dialect(), FilingDialect::InlineMarkup);
        assert_eq!(doc.len(), 13);
        assert!(!doc.is_empty());
    }

    #[test]
    fn test_from_path_detects_dialect() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("filing.htm");
        let mut f = std::fs::File::create(&path).unwrap();
        write!(f, "<p>ITEM 1. Business</p>").unwrap();

        let doc = RawDocument::from_path(&path).unwrap();
        assert_eq!(doc.dialect(), FilingDialect::InlineMarkup);
        assert!(doc.content().contains("ITEM 1"));
    }

    #[test]
    fn test_from_path_rejects_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("filing.docx");
        std::fs::File::create(&path).unwrap();

        match RawDocument::from_path(&path) {
            Err(EdgarError::UnsupportedDocument(msg)) => assert!(msg.contains("filing.docx")),
            other => panic!("expected UnsupportedDocument, got {other:?}"),
        }
    }

    #[test]
    fn test_from_path_missing_file_is_io_error() {
        let missing = Path::new("/nonexistent/filing.htm");
        assert!(matches!(
            RawDocument::from_path(missing),
            Err(EdgarError::Io(_))
        ));
    }
}
