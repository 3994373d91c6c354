//! Section slicer.
//!
//! Cuts the document into per-section spans from the resolved boundary
//! list. Every boundary participates in span-edge computation, but only
//! keys in the caller-visible extracted subset produce output sections;
//! the rest exist to terminate their neighbors' spans correctly.

use crate::clean::MarkupCleaner;
use crate::reconcile::ResolvedBoundary;
use edgar_core::{RawDocument, Result, Section, SectionKey, SectionMap};
use std::collections::BTreeSet;

/// Slice the document along `boundaries` (sorted by start) and render each
/// extracted section through the cleaner.
pub(crate) fn slice_sections(
    doc: &RawDocument,
    boundaries: &[ResolvedBoundary],
    extracted: &BTreeSet<SectionKey>,
    cleaner: &dyn MarkupCleaner,
) -> Result<SectionMap> {
    let text = doc.content();
    let mut map = SectionMap::new();

    for (i, boundary) in boundaries.iter().enumerate() {
        if !extracted.contains(&boundary.key) {
            continue;
        }
        let end = boundaries.get(i + 1).map_or(text.len(), |next| next.start);
        let span = &text[boundary.start..end];
        let cleaned = cleaner.clean(span, doc.dialect())?;
        map.insert(
            boundary.key,
            Section {
                key: boundary.key,
                markup: cleaned.markup,
                text: cleaned.text,
            },
        );
    }

    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clean::DefaultCleaner;
    use edgar_core::FilingDialect;

    fn extracted_all() -> BTreeSet<SectionKey> {
        SectionKey::EXTRACTED.into_iter().collect()
    }

    #[test]
    fn test_spans_end_at_next_boundary() {
        let content = "ITEM 1. Business text here ITEM 1A. Risk factors here";
        let doc = RawDocument::new(content, FilingDialect::InlineMarkup);
        let boundaries = vec![
            ResolvedBoundary {
                key: SectionKey::Item1,
                start: 0,
            },
            ResolvedBoundary {
                key: SectionKey::Item1A,
                start: 27,
            },
        ];
        let map = slice_sections(&doc, &boundaries, &extracted_all(), &DefaultCleaner).unwrap();

        let item1 = &map[&SectionKey::Item1];
        assert!(item1.text.contains("Business text here"));
        assert!(!item1.text.contains("Risk factors"));

        let item1a = &map[&SectionKey::Item1A];
        assert!(item1a.text.contains("Risk factors here"));
    }

    #[test]
    fn test_last_section_runs_to_document_end() {
        let content = "ITEM 7. Discussion runs to the very end of the document";
        let doc = RawDocument::new(content, FilingDialect::InlineMarkup);
        let boundaries = vec![ResolvedBoundary {
            key: SectionKey::Item7,
            start: 0,
        }];
        let map = slice_sections(&doc, &boundaries, &extracted_all(), &DefaultCleaner).unwrap();
        assert!(map[&SectionKey::Item7]
            .text
            .ends_with("very end of the document"));
    }

    #[test]
    fn test_anchor_only_keys_produce_no_section_but_bound_spans() {
        let content = "ITEM 7A. Market risk ITEM 8. Financial statements follow";
        let doc = RawDocument::new(content, FilingDialect::InlineMarkup);
        let boundaries = vec![
            ResolvedBoundary {
                key: SectionKey::Item7A,
                start: 0,
            },
            ResolvedBoundary {
                key: SectionKey::Item8,
                start: 21,
            },
        ];
        let map = slice_sections(&doc, &boundaries, &extracted_all(), &DefaultCleaner).unwrap();

        // item8 is an anchor: absent from output, but it terminated item7a
        assert!(!map.contains_key(&SectionKey::Item8));
        let item7a = &map[&SectionKey::Item7A];
        assert!(item7a.text.contains("Market risk"));
        assert!(!item7a.text.contains("Financial statements"));
    }

    #[test]
    fn test_no_boundaries_yields_empty_map() {
        let doc = RawDocument::new("nothing here", FilingDialect::InlineMarkup);
        let map = slice_sections(&doc, &[], &extracted_all(), &DefaultCleaner).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_custom_extracted_subset() {
        let content = "ITEM 1. Business ITEM 2. Properties";
        let doc = RawDocument::new(content, FilingDialect::InlineMarkup);
        let boundaries = vec![
            ResolvedBoundary {
                key: SectionKey::Item1,
                start: 0,
            },
            ResolvedBoundary {
                key: SectionKey::Item2,
                start: 17,
            },
        ];
        let only_item2: BTreeSet<SectionKey> = [SectionKey::Item2].into_iter().collect();
        let map = slice_sections(&doc, &boundaries, &only_item2, &DefaultCleaner).unwrap();
        assert_eq!(map.len(), 1);
        assert!(map.contains_key(&SectionKey::Item2));
    }
}
