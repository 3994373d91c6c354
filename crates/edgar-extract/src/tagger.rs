//! Entity-tagging seam.
//!
//! Named-entity recognition is an external capability: something that takes
//! a section's plain text plus a label filter and returns the matching
//! entity strings. The engine never calls it; callers apply a tagger to an
//! extracted section map once per section, with that section's label table.

use edgar_core::{SectionKey, SectionMap};
use std::collections::{BTreeMap, BTreeSet};

/// An external named-entity tagger.
pub trait EntityTagger {
    /// Return the deduplicated entity strings in `text` whose label is in
    /// `labels`. An empty label filter yields an empty set.
    fn tag(&self, text: &str, labels: &[&str]) -> BTreeSet<String>;
}

/// Apply `tagger` to every extracted section, using each section's fixed
/// label table.
///
/// Sections whose label table is empty still appear in the result with an
/// empty entity set, so the output keys mirror the input keys.
pub fn tag_sections(
    sections: &SectionMap,
    tagger: &dyn EntityTagger,
) -> BTreeMap<SectionKey, BTreeSet<String>> {
    sections
        .iter()
        .map(|(key, section)| (*key, tagger.tag(&section.text, key.entity_labels())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use edgar_core::Section;

    /// Toy tagger: treats every capitalized word as a PERSON and every
    /// all-caps word as an ORG.
    struct StubTagger;

    impl EntityTagger for StubTagger {
        fn tag(&self, text: &str, labels: &[&str]) -> BTreeSet<String> {
            text.split_whitespace()
                .filter(|w| {
                    let is_org = w.chars().all(|c| c.is_uppercase());
                    let is_person = !is_org
                        && w.chars().next().is_some_and(char::is_uppercase);
                    (is_org && labels.contains(&"ORG")) || (is_person && labels.contains(&"PERSON"))
                })
                .map(str::to_string)
                .collect()
        }
    }

    fn section(key: SectionKey, text: &str) -> Section {
        Section {
            key,
            markup: String::new(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_labels_route_per_section() {
        let mut sections = SectionMap::new();
        sections.insert(
            SectionKey::Item10,
            section(SectionKey::Item10, "director Jane oversees ACME"),
        );
        sections.insert(
            SectionKey::Item13,
            section(SectionKey::Item13, "counterparty Bob at ACME"),
        );

        let tagged = tag_sections(&sections, &StubTagger);

        // item10 gathers PERSON only: the all-caps ORG is filtered out
        assert_eq!(
            tagged[&SectionKey::Item10],
            BTreeSet::from(["Jane".to_string()])
        );
        // item13 gathers PERSON and ORG
        assert_eq!(
            tagged[&SectionKey::Item13],
            BTreeSet::from(["Bob".to_string(), "ACME".to_string()])
        );
    }

    #[test]
    fn test_sections_without_targets_get_empty_sets() {
        let mut sections = SectionMap::new();
        sections.insert(
            SectionKey::Item1,
            section(SectionKey::Item1, "Jane runs ACME"),
        );
        let tagged = tag_sections(&sections, &StubTagger);
        assert!(tagged[&SectionKey::Item1].is_empty());
    }

    #[test]
    fn test_output_keys_mirror_input_keys() {
        let sections = SectionMap::new();
        assert!(tag_sections(&sections, &StubTagger).is_empty());
    }
}
