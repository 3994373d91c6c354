//! Markup-cleaning capability.
//!
//! Every extracted section span is rendered twice: as normalized markup and
//! as plain text. The engine treats the cleaner as a pluggable dependency
//! so callers can substitute their own renderer; [`DefaultCleaner`] covers
//! both supported dialects.

use edgar_core::{FilingDialect, Result};
use regex::Regex;
use scraper::Html;
use std::sync::LazyLock;

/// Both renderings of one section span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedMarkup {
    /// Normalized markup rendering.
    pub markup: String,
    /// Plain-text rendering.
    pub text: String,
}

/// Renders a document substring into normalized markup and plain text.
pub trait MarkupCleaner {
    /// Clean one span of the given dialect.
    ///
    /// # Errors
    ///
    /// The built-in cleaner is infallible, but external implementations may
    /// fail; such failures abort the whole extraction call.
    fn clean(&self, span: &str, dialect: FilingDialect) -> Result<CleanedMarkup>;
}

/// Built-in cleaner for both filing dialects.
///
/// Inline HTML spans are parsed and re-serialized, with text content joined
/// on newlines. SGML container spans keep their raw markup (there is no
/// canonical pretty form for them) and get a tag-stripped, entity-decoded
/// text rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DefaultCleaner;

static SGML_TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("regex is compile-time constant"));
static NUMERIC_ENTITY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&#(\d+);").expect("regex is compile-time constant"));

impl MarkupCleaner for DefaultCleaner {
    fn clean(&self, span: &str, dialect: FilingDialect) -> Result<CleanedMarkup> {
        match dialect {
            FilingDialect::InlineMarkup => Ok(clean_inline_markup(span)),
            FilingDialect::SgmlContainer => Ok(clean_sgml_container(span)),
        }
    }
}

fn clean_inline_markup(span: &str) -> CleanedMarkup {
    let fragment = Html::parse_fragment(span);
    let root = fragment.root_element();

    let markup = root.inner_html();
    let text = root
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    CleanedMarkup { markup, text }
}

fn clean_sgml_container(span: &str) -> CleanedMarkup {
    let stripped = SGML_TAG_PATTERN.replace_all(span, "");
    let decoded = decode_entities(&stripped);
    let text = decoded
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    CleanedMarkup {
        markup: span.to_string(),
        text,
    }
}

/// Decode numeric character references and the named entities EDGAR
/// plaintext filings actually contain.
fn decode_entities(s: &str) -> String {
    let numeric = NUMERIC_ENTITY_PATTERN.replace_all(s, |caps: &regex::Captures<'_>| {
        caps[1]
            .parse::<u32>()
            .ok()
            .and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_default()
    });
    numeric
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
