//! Markup dialect for filing documents.
//!
//! EDGAR serves filings in two shapes this library can parse: modern inline
//! HTML/XHTML documents, and the older SGML-wrapped full-submission container
//! files distributed as `.txt`.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Markup dialect of a filing document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FilingDialect {
    /// Inline HTML/XHTML filing (`.htm`, `.html`, `.xhtml`)
    #[serde(rename = "HTML")]
    InlineMarkup,
    /// SGML full-submission container (`.txt`)
    #[serde(rename = "SGML")]
    SgmlContainer,
}

impl FilingDialect {
    /// Detect dialect from a file extension.
    #[inline]
    #[must_use = "detects dialect from file extension"]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "htm" | "html" | "xhtml" => Some(Self::InlineMarkup),
            "txt" => Some(Self::SgmlContainer),
            _ => None,
        }
    }

    /// Detect dialect from a filesystem path.
    #[inline]
    #[must_use = "detects dialect from a path"]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Detect dialect from a document URL.
    ///
    /// Query strings and fragments are ignored; only the extension of the
    /// final path segment is considered.
    #[must_use = "detects dialect from a URL"]
    pub fn from_url(url: &str) -> Option<Self> {
        let path = url.split(['?', '#']).next().unwrap_or(url);
        let file = path.rsplit('/').next().unwrap_or(path);
        let (_, ext) = file.rsplit_once('.')?;
        Self::from_extension(ext)
    }

    /// Get file extensions associated with this dialect.
    #[inline]
    #[must_use = "returns file extensions for this dialect"]
    pub const fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::InlineMarkup => &["htm", "html", "xhtml"],
            Self::SgmlContainer => &["txt"],
        }
    }
}

impl std::fmt::Display for FilingDialect {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::InlineMarkup => "HTML",
            Self::SgmlContainer => "SGML",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for FilingDialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "HTML" | "HTM" | "XHTML" => Ok(Self::InlineMarkup),
            "SGML" | "TXT" => Ok(Self::SgmlContainer),
            _ => Err(format!("unknown filing dialect: '{s}'")),
        }
    }
}
