//! Header candidate scanner.
//!
//! Runs the header grammar over the raw document text and yields every
//! substring that looks like a section-header token, with byte offsets.
//! This stage is pure pattern discovery: no normalization, no filtering.
//! Matching is non-overlapping and left-to-right, and an empty result is a
//! valid outcome.
//!
//! The grammar recognizes two families, singular ("Item N") and combined
//! ("Items N"). Both tolerate entity-encoded spaces, upstream corruption
//! that truncates the word stem ("tem", "EM"), case variation, and an
//! optional trailing period. Mixed-case stems must follow a tag close (`>`)
//! to count; the fully upper-case literal matches anywhere.

use regex::Regex;
use std::sync::LazyLock;

/// Section numbers recognized by the grammar: 1, 1A, 1B, 2..6, 7, 7A, 8,
/// 9, 9A, 9B, 10..16.
const SECTION_NUMBER: &str = r"(1(A|B|0|1|2|3|4|5|6)?)|2|3|4|5|6|(7(A)?)|8|(9(A|B)?)";

/// Singular family stem: a possibly-corrupted "Item" after a tag close, or
/// the bare upper-case literal.
const SINGULAR_STEM: &str = r"(>(Ite|ITE|te|TE|e|E)?(m|M)(\s|&#160;|&nbsp;))|(ITEM(\s|&#160;|&nbsp;))";

/// Combined family stem: "Items" in the same corrupted/cased variants.
const COMBINED_STEM: &str =
    r"(>(Ite|ITE|te|TE|e|E)?(ms|MS)(\s|&#160;|&nbsp;))|(ITEMS(\s|&#160;|&nbsp;))";

static HEADER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(({SINGULAR_STEM})({SECTION_NUMBER})\.?)|(({COMBINED_STEM})({SECTION_NUMBER})\.?)"
    ))
    .expect("regex is compile-time constant")
});

/// One raw grammar match: the matched text and its byte offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScanMatch<'a> {
    pub raw: &'a str,
    pub start: usize,
    pub end: usize,
}

/// Scan the document text for header candidates.
pub(crate) fn scan_headers(text: &str) -> impl Iterator<Item = ScanMatch<'_>> {
    HEADER_PATTERN.find_iter(text).map(|m| ScanMatch {
        raw: m.as_str(),
        start: m.start(),
        end: m.end(),
    })
}
