//! The section catalogue of an annual-report filing.
//!
//! Filings are divided into numbered "items" with a fixed, ordinal-ranked
//! catalogue (Item 1 through Item 16, with lettered sub-items). The catalogue
//! serves two purposes: a subset of it is extracted and returned to callers,
//! while the remaining keys exist solely to anchor span edges and
//! gap-adjacency checks during boundary reconciliation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Canonical identifier for a filing section.
///
/// Declaration order is catalogue order; the derived `Ord` therefore ranks
/// keys by their ordinal, and [`SectionKey::ordinal`] is the index into
/// [`SectionKey::CATALOGUE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKey {
    /// Item 1 - Business
    Item1,
    /// Item 1A - Risk Factors
    Item1A,
    /// Item 1B - Unresolved Staff Comments
    Item1B,
    /// Item 2 - Properties
    Item2,
    /// Item 3 - Legal Proceedings
    Item3,
    /// Item 4 - Mine Safety Disclosures
    Item4,
    /// Item 5 - Market for Registrant's Common Equity
    Item5,
    /// Item 6 - Selected Financial Data
    Item6,
    /// Item 7 - Management's Discussion and Analysis
    Item7,
    /// Item 7A - Quantitative and Qualitative Disclosures About Market Risk
    Item7A,
    /// Item 8 - Financial Statements and Supplementary Data
    Item8,
    /// Item 9 - Changes in and Disagreements with Accountants
    Item9,
    /// Item 9A - Controls and Procedures
    Item9A,
    /// Item 9B - Other Information
    Item9B,
    /// Item 10 - Directors, Executive Officers and Corporate Governance
    Item10,
    /// Item 11 - Executive Compensation
    Item11,
    /// Item 12 - Security Ownership of Certain Beneficial Owners
    Item12,
    /// Item 13 - Certain Relationships and Related Transactions
    Item13,
    /// Item 14 - Principal Accountant Fees and Services
    Item14,
    /// Item 15 - Exhibits and Financial Statement Schedules
    Item15,
    /// Item 16 - Form 10-K Summary
    Item16,
}

impl SectionKey {
    /// The full catalogue in ordinal order.
    pub const CATALOGUE: [Self; 21] = [
        Self::Item1,
        Self::Item1A,
        Self::Item1B,
        Self::Item2,
        Self::Item3,
        Self::Item4,
        Self::Item5,
        Self::Item6,
        Self::Item7,
        Self::Item7A,
        Self::Item8,
        Self::Item9,
        Self::Item9A,
        Self::Item9B,
        Self::Item10,
        Self::Item11,
        Self::Item12,
        Self::Item13,
        Self::Item14,
        Self::Item15,
        Self::Item16,
    ];

    /// The subset of the catalogue returned to callers. The other keys only
    /// anchor span edges for their neighbors.
    pub const EXTRACTED: [Self; 10] = [
        Self::Item1,
        Self::Item1A,
        Self::Item2,
        Self::Item3,
        Self::Item6,
        Self::Item7,
        Self::Item7A,
        Self::Item10,
        Self::Item12,
        Self::Item13,
    ];

    /// Position of this key in the fixed catalogue.
    #[inline]
    #[must_use = "returns the catalogue ordinal of this key"]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Whether this key is in the caller-visible extracted subset.
    #[inline]
    #[must_use = "returns whether this key is extracted for callers"]
    pub fn is_extracted(self) -> bool {
        Self::EXTRACTED.contains(&self)
    }

    /// The canonical key string, e.g. `"item7a"`.
    #[inline]
    #[must_use = "returns the canonical key string"]
    pub const fn canonical(self) -> &'static str {
        match self {
            Self::Item1 => "item1",
            Self::Item1A => "item1a",
            Self::Item1B => "item1b",
            Self::Item2 => "item2",
            Self::Item3 => "item3",
            Self::Item4 => "item4",
            Self::Item5 => "item5",
            Self::Item6 => "item6",
            Self::Item7 => "item7",
            Self::Item7A => "item7a",
            Self::Item8 => "item8",
            Self::Item9 => "item9",
            Self::Item9A => "item9a",
            Self::Item9B => "item9b",
            Self::Item10 => "item10",
            Self::Item11 => "item11",
            Self::Item12 => "item12",
            Self::Item13 => "item13",
            Self::Item14 => "item14",
            Self::Item15 => "item15",
            Self::Item16 => "item16",
        }
    }

    /// Parse a canonical key string (`"item7a"`) into its catalogue entry.
    #[must_use = "parses a canonical key string"]
    pub fn from_canonical(s: &str) -> Option<Self> {
        match s {
            "item1" => Some(Self::Item1),
            "item1a" => Some(Self::Item1A),
            "item1b" => Some(Self::Item1B),
            "item2" => Some(Self::Item2),
            "item3" => Some(Self::Item3),
            "item4" => Some(Self::Item4),
            "item5" => Some(Self::Item5),
            "item6" => Some(Self::Item6),
            "item7" => Some(Self::Item7),
            "item7a" => Some(Self::Item7A),
            "item8" => Some(Self::Item8),
            "item9" => Some(Self::Item9),
            "item9a" => Some(Self::Item9A),
            "item9b" => Some(Self::Item9B),
            "item10" => Some(Self::Item10),
            "item11" => Some(Self::Item11),
            "item12" => Some(Self::Item12),
            "item13" => Some(Self::Item13),
            "item14" => Some(Self::Item14),
            "item15" => Some(Self::Item15),
            "item16" => Some(Self::Item16),
            _ => None,
        }
    }

    /// Entity labels gathered from this section's text when a tagger is
    /// applied. Sections without entity targets return an empty slice.
    ///
    /// Proper-name sections collect person/organization labels; the
    /// properties section collects place labels; the directors section
    /// collects person names only.
    #[inline]
    #[must_use = "returns the entity labels gathered for this section"]
    pub const fn entity_labels(self) -> &'static [&'static str] {
        match self {
            Self::Item1A | Self::Item3 | Self::Item7 | Self::Item7A | Self::Item12
            | Self::Item13 => &["PERSON", "ORG"],
            Self::Item2 => &["GPE", "FAC", "LOC"],
            Self::Item10 => &["PERSON"],
            _ => &[],
        }
    }
}

impl std::fmt::Display for SectionKey {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.canonical())
    }
}

impl std::str::FromStr for SectionKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_canonical(&s.to_lowercase())
            .ok_or_else(|| format!("unknown section key: '{s}'"))
    }
}

/// One extracted filing section: its key plus both renderings of its span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Catalogue key of this section.
    #[serde(skip_serializing)]
    pub key: SectionKey,
    /// Normalized markup rendering of the section span.
    pub markup: String,
    /// Plain-text rendering of the section span.
    pub text: String,
}

/// Ordered mapping from extracted section key to its content.
///
/// Ordered by catalogue ordinal. Absent keys mean the section was not found
/// or did not survive boundary reconciliation; an empty map is a valid
/// outcome for a document with no recognizable headers.
pub type SectionMap = BTreeMap<SectionKey, Section>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_order_matches_ordinal() {
        for (i, key) in SectionKey::CATALOGUE.iter().enumerate() {
            assert_eq!(key.ordinal(), i);
        }
        // Derived Ord follows catalogue order
        assert!(SectionKey::Item1 < SectionKey::Item1A);
        assert!(SectionKey::Item7A < SectionKey::Item8);
        assert!(SectionKey::Item9B < SectionKey::Item10);
    }

    #[test]
    fn test_canonical_roundtrip() {
        for key in SectionKey::CATALOGUE {
            assert_eq!(SectionKey::from_canonical(key.canonical()), Some(key));
        }
        assert_eq!(SectionKey::from_canonical("item17"), None);
        assert_eq!(SectionKey::from_canonical("item"), None);
        assert_eq!(SectionKey::from_canonical(""), None);
    }

    #[test]
    fn test_extracted_subset() {
        assert!(SectionKey::Item1.is_extracted());
        assert!(SectionKey::Item7A.is_extracted());
        assert!(SectionKey::Item13.is_extracted());
        // Anchor-only keys
        assert!(!SectionKey::Item1B.is_extracted());
        assert!(!SectionKey::Item8.is_extracted());
        assert!(!SectionKey::Item16.is_extracted());
        assert_eq!(SectionKey::EXTRACTED.len(), 10);
    }

    #[test]
    fn test_entity_labels() {
        assert_eq!(SectionKey::Item10.entity_labels(), &["PERSON"]);
        assert_eq!(SectionKey::Item2.entity_labels(), &["GPE", "FAC", "LOC"]);
        assert_eq!(SectionKey::Item1A.entity_labels(), &["PERSON", "ORG"]);
        assert!(SectionKey::Item1.entity_labels().is_empty());
        assert!(SectionKey::Item8.entity_labels().is_empty());
    }

    #[test]
    fn test_serialization_as_canonical_string() {
        let json = serde_json::to_string(&SectionKey::Item7A).unwrap();
        assert_eq!(json, r#""item7a""#);
        let back: SectionKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SectionKey::Item7A);
    }

    #[test]
    fn test_section_map_key_serialization() {
        let mut map = SectionMap::new();
        map.insert(
            SectionKey::Item1,
            Section {
                key: SectionKey::Item1,
                markup: "<p>Business</p>".to_string(),
                text: "Business".to_string(),
            },
        );
        let json = serde_json::to_value(&map).unwrap();
        assert!(json.get("item1").is_some());
        // The key is the map key, not repeated inside the section body
        assert!(json["item1"].get("key").is_none());
        assert_eq!(json["item1"]["text"], "Business");
    }

    #[test]
    fn test_from_str_case_insensitive() {
        use std::str::FromStr;
        assert_eq!(SectionKey::from_str("ITEM7A").unwrap(), SectionKey::Item7A);
        assert_eq!(SectionKey::from_str("item1").unwrap(), SectionKey::Item1);
        assert!(SectionKey::from_str("item99").is_err());
    }
}
