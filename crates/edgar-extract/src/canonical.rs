//! Candidate canonicalization.
//!
//! Maps each raw scanner match onto its catalogue key through a single
//! deterministic normalization: decode entity-encoded spaces, strip
//! whitespace, punctuation and the tag-close artifact, then split the
//! surface form into stem and number suffix. Matches whose suffix does not
//! correspond to a catalogue entry are discarded silently; corrupted scans
//! are expected.

use crate::scan::ScanMatch;
use edgar_core::SectionKey;

/// A canonicalized header candidate.
///
/// `upper` records whether every alphabetic character of the stripped
/// surface form is upper-case (an upper-case-heavy heading is body style,
/// a mixed-case one is usually a table-of-contents reference). `combined`
/// records an "Items N" surface form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HeaderCandidate {
    pub raw_text: String,
    pub key: SectionKey,
    pub start: usize,
    pub end: usize,
    pub upper: bool,
    pub combined: bool,
}

/// Canonicalize one scanner match. Returns `None` when the number suffix is
/// not a catalogue entry.
pub(crate) fn canonicalize(m: &ScanMatch<'_>) -> Option<HeaderCandidate> {
    let stripped = strip_surface(m.raw);

    let digit_at = stripped.find(|c: char| c.is_ascii_digit())?;
    let (stem, suffix) = stripped.split_at(digit_at);
    if stem.is_empty() || suffix.is_empty() {
        return None;
    }

    let has_alpha = stripped.chars().any(|c| c.is_alphabetic());
    let upper = has_alpha
        && stripped
            .chars()
            .filter(|c| c.is_alphabetic())
            .all(|c| c.is_uppercase());
    let combined = stem.ends_with(['s', 'S']);

    let canonical = format!("item{}", suffix.to_ascii_lowercase());
    let key = match SectionKey::from_canonical(&canonical) {
        Some(key) => key,
        None => {
            log::debug!("discarding candidate with unknown suffix: {:?}", m.raw);
            return None;
        }
    };

    Some(HeaderCandidate {
        raw_text: m.raw.to_string(),
        key,
        start: m.start,
        end: m.end,
        upper,
        combined,
    })
}

/// Decode entity-encoded spaces and drop whitespace, periods and the
/// leading tag-close from a matched surface form.
fn strip_surface(raw: &str) -> String {
    let mut s = raw.replace("&#160;", " ").replace("&nbsp;", " ");
    s.retain(|c| !c.is_whitespace() && c != '.' && c != '>');
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cand(raw: &str) -> Option<HeaderCandidate> {
        canonicalize(&ScanMatch {
            raw,
            start: 0,
            end: raw.len(),
        })
    }

    #[test]
    fn test_upper_case_heading() {
        let c = cand("ITEM 7A.").unwrap();
        assert_eq!(c.key, SectionKey::Item7A);
        assert!(c.upper);
        assert!(!c.combined);
    }

    #[test]
    fn test_mixed_case_toc_style() {
        let c = cand(">Item 7A.").unwrap();
        assert_eq!(c.key, SectionKey::Item7A);
        assert!(!c.upper);
    }

    #[test]
    fn test_entity_encoded_separator() {
        let c = cand(">Item&#160;1A").unwrap();
        assert_eq!(c.key, SectionKey::Item1A);
        assert!(!c.upper);

        let c = cand(">Item&nbsp;10").unwrap();
        assert_eq!(c.key, SectionKey::Item10);
    }

    #[test]
    fn test_corrupted_stems_keep_case_information() {
        let c = cand(">tem 9B.").unwrap();
        assert_eq!(c.key, SectionKey::Item9B);
        assert!(!c.upper);

        let c = cand(">EM 7").unwrap();
        assert_eq!(c.key, SectionKey::Item7);
        assert!(c.upper);

        let c = cand(">m 16").unwrap();
        assert_eq!(c.key, SectionKey::Item16);
        assert!(!c.upper);
    }

    #[test]
    fn test_combined_forms_map_to_first_key() {
        let c = cand("ITEMS 7.").unwrap();
        assert_eq!(c.key, SectionKey::Item7);
        assert!(c.combined);
        assert!(c.upper);

        let c = cand(">Items 12").unwrap();
        assert_eq!(c.key, SectionKey::Item12);
        assert!(c.combined);
        assert!(!c.upper);
    }

    #[test]
    fn test_unknown_suffix_discarded() {
        assert!(cand(">m 17").is_none());
        assert!(cand("ITEM 99").is_none());
    }

    #[test]
    fn test_degenerate_input_discarded() {
        assert!(cand("").is_none());
        assert!(cand(">").is_none());
        assert!(cand("no digits").is_none());
    }

    #[test]
    fn test_offsets_preserved() {
        let c = canonicalize(&ScanMatch {
            raw: "ITEM 1.",
            start: 120,
            end: 127,
        })
        .unwrap();
        assert_eq!(c.start, 120);
        assert_eq!(c.end, 127);
        assert_eq!(c.raw_text, "ITEM 1.");
    }
}
