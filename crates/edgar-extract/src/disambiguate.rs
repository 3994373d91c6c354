//! Disambiguation filter.
//!
//! Removes candidates that are not true section starts. Two checks, in
//! order:
//!
//! 1. **Continuation markers** - an upper-case-heavy candidate followed
//!    within a fixed lookahead window by "(continued)" is a restated
//!    heading, not a new boundary, and is dropped.
//! 2. **Table-of-contents duplicates** - a mixed-case occurrence sharing a
//!    key with a surviving upper-case occurrence is the ToC reference and
//!    is dropped.
//!
//! The continuation check runs first and is authoritative: an upper-case
//! candidate it consumes does not trigger the ToC drop for its key. This
//! stage only removes, never invents or merges, and its result depends only
//! on the candidate multiset, not scan order.

use crate::canonical::HeaderCandidate;
use regex::Regex;
use std::sync::LazyLock;

static CONTINUED_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((C|c)ontinued\)").expect("regex is compile-time constant"));

/// Filter out continuation restatements and ToC duplicates.
///
/// `lookahead` is the window, in bytes from each candidate's start, that is
/// searched for a continuation marker. The window is clamped to a character
/// boundary so multi-byte text never panics.
pub(crate) fn filter_candidates(
    candidates: &[HeaderCandidate],
    text: &str,
    lookahead: usize,
) -> Vec<HeaderCandidate> {
    let mut dropped = vec![false; candidates.len()];

    // Continuation check, authoritative for upper-case occurrences.
    for (i, c) in candidates.iter().enumerate() {
        if !c.upper {
            continue;
        }
        let window_end = floor_char_boundary(text, c.start.saturating_add(lookahead));
        if CONTINUED_PATTERN.is_match(&text[c.start..window_end]) {
            log::debug!("dropping continuation restatement of {} at {}", c.key, c.start);
            dropped[i] = true;
        }
    }

    // ToC duplicates: mixed-case occurrences sharing a key with a surviving
    // upper-case occurrence.
    for (i, c) in candidates.iter().enumerate() {
        if !c.upper || dropped[i] {
            continue;
        }
        for (j, other) in candidates.iter().enumerate() {
            if j != i && other.key == c.key && !other.upper && !dropped[j] {
                log::debug!("dropping ToC reference to {} at {}", other.key, other.start);
                dropped[j] = true;
            }
        }
    }

    let mut kept: Vec<HeaderCandidate> = candidates
        .iter()
        .enumerate()
        .filter(|(i, _)| !dropped[*i])
        .map(|(_, c)| c.clone())
        .collect();
    // Ties in the multiset resolve by original document position.
    kept.sort_by_key(|c| c.start);
    kept
}

/// Largest index `<= at` that lies on a UTF-8 character boundary of `s`.
fn floor_char_boundary(s: &str, at: usize) -> usize {
    if at >= s.len() {
        return s.len();
    }
    let mut idx = at;
    while !s.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}
