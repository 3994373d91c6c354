//! Positional reconciler.
//!
//! Produces the final boundary set from the filtered candidates in three
//! steps:
//!
//! 1. **Deduplication** - among surviving candidates sharing a key, keep
//!    the one with the greatest start offset. The last occurrence in
//!    reading order is taken as authoritative; earlier same-key hits are
//!    treated as false positives the filter did not recognize.
//! 2. **Ordering repair** - with the deduplicated set in catalogue order,
//!    repeatedly remove the first element whose position contradicts its
//!    neighbors and re-evaluate from scratch until a full pass finds no
//!    inconsistency. Removal of one element can surface new
//!    inconsistencies, so this is a fixed point, not a single pass. The
//!    loop is bounded by the candidate count and always terminates.
//! 3. **Rescue** - for every key removed in step 2, try to reinstate the
//!    latest-positioned occurrence from the full candidate pool (including
//!    occurrences the disambiguation filter discarded) whose offset falls
//!    strictly between the nearest surviving lower- and higher-ordinal
//!    catalogue neighbors. If neither neighbor survived, the key stays
//!    absent; that is an accepted outcome, not an error.
//!
//! After this stage boundaries are strictly increasing in start. Catalogue
//! order violations that removal and rescue could not repair are accepted
//! as-is; documents occasionally present items out of catalogue order.

use crate::canonical::HeaderCandidate;
use edgar_core::SectionKey;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// A resolved section boundary: one per key, sorted by start offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedBoundary {
    /// Catalogue key of the section starting here.
    pub key: SectionKey,
    /// Byte offset of the section start in the document.
    pub start: usize,
}

/// Reconcile the filtered candidates into the final boundary list.
///
/// `pool` is the full post-canonicalization candidate set, consulted by the
/// rescue pass; `kept` is the subset that survived disambiguation.
pub(crate) fn reconcile(
    kept: Vec<HeaderCandidate>,
    pool: &[HeaderCandidate],
) -> Vec<ResolvedBoundary> {
    // Step 1: keep-last dedupe per key. BTreeMap keyed by SectionKey leaves
    // the values in catalogue order for step 2.
    let mut by_key: BTreeMap<SectionKey, HeaderCandidate> = BTreeMap::new();
    for c in kept {
        match by_key.entry(c.key) {
            Entry::Occupied(mut e) => {
                if c.start > e.get().start {
                    e.insert(c);
                }
            }
            Entry::Vacant(e) => {
                e.insert(c);
            }
        }
    }
    let mut ordered: Vec<HeaderCandidate> = by_key.into_values().collect();

    // Step 2: fixed-point removal of locally inconsistent entries.
    let mut removed_keys: Vec<SectionKey> = Vec::new();
    while ordered.len() > 1 {
        let inconsistent = (0..ordered.len()).find(|&i| {
            if i == 0 {
                ordered[0].start > ordered[1].start
            } else {
                ordered[i].start < ordered[i - 1].start
            }
        });
        match inconsistent {
            Some(i) => {
                let c = ordered.remove(i);
                log::debug!(
                    "removing out-of-order boundary {} at {} for repair",
                    c.key,
                    c.start
                );
                removed_keys.push(c.key);
            }
            None => break,
        }
    }

    // Step 3: rescue removed keys from the full pool, bounded by the
    // nearest surviving catalogue neighbors. Rescues are judged against the
    // survivor set only, not against each other.
    let surviving: BTreeMap<SectionKey, usize> =
        ordered.iter().map(|c| (c.key, c.start)).collect();
    let mut rescued: Vec<HeaderCandidate> = Vec::new();
    for key in removed_keys {
        let pos = key.ordinal();
        let lower = SectionKey::CATALOGUE[..pos]
            .iter()
            .rev()
            .find_map(|k| surviving.get(k).copied());
        let higher = SectionKey::CATALOGUE[pos + 1..]
            .iter()
            .find_map(|k| surviving.get(k).copied());

        let reinstated = pool
            .iter()
            .filter(|c| c.key == key)
            .filter(|c| match (lower, higher) {
                (None, None) => false,
                (Some(lo), None) => c.start > lo,
                (None, Some(hi)) => c.start < hi,
                (Some(lo), Some(hi)) => c.start > lo && c.start < hi,
            })
            .max_by_key(|c| c.start);

        match reinstated {
            Some(c) => {
                log::debug!("rescued boundary {} at {}", c.key, c.start);
                rescued.push(c.clone());
            }
            None => log::debug!("no rescuable occurrence of {key}, key stays absent"),
        }
    }

    ordered.extend(rescued);
    ordered.sort_by_key(|c| c.start);

    for c in &ordered {
        if c.combined {
            log::warn!(
                "combined reference {:?} resolved as the boundary for {}; \
                 any further items it names are not registered",
                c.raw_text,
                c.key
            );
        }
    }

    ordered
        .into_iter()
        .map(|c| ResolvedBoundary {
            key: c.key,
            start: c.start,
        })
        .collect()
}
