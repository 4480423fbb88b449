//! Lexical categories and their default confidence weights.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of a name's origin and role within its knowledge base.
///
/// Every category carries a default confidence weight, used when an entry
/// arrives without an explicit weight (notably when reloading a persisted
/// lexicon, which does not store weights).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LexicalCategory {
    /// The primary human-readable label of a class.
    Label,
    /// The local fragment of the class identifier.
    LocalName,
    /// A synonym declared as exact by the source.
    ExactSynonym,
    /// A related or broader synonym.
    OtherSynonym,
    /// A name recognized as a logical or mathematical expression.
    Formula,
    /// A synonym derived internally by the synonym generators.
    InternalSynonym,
}

impl LexicalCategory {
    /// All categories, in declaration order.
    pub const ALL: &'static [LexicalCategory] = &[
        LexicalCategory::Label,
        LexicalCategory::LocalName,
        LexicalCategory::ExactSynonym,
        LexicalCategory::OtherSynonym,
        LexicalCategory::Formula,
        LexicalCategory::InternalSynonym,
    ];

    /// The default confidence weight for entries of this category.
    pub fn default_weight(&self) -> f64 {
        match self {
            LexicalCategory::Label => 1.0,
            LexicalCategory::LocalName => 1.0,
            LexicalCategory::ExactSynonym => 0.95,
            LexicalCategory::OtherSynonym => 0.85,
            LexicalCategory::Formula => 0.8,
            LexicalCategory::InternalSynonym => 0.9,
        }
    }

    /// Parse a category from its display form, case-insensitively.
    pub fn parse(s: &str) -> Option<LexicalCategory> {
        Self::ALL
            .iter()
            .find(|c| s.eq_ignore_ascii_case(&c.to_string()))
            .copied()
    }
}

impl fmt::Display for LexicalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LexicalCategory::Label => "Label",
            LexicalCategory::LocalName => "Local Name",
            LexicalCategory::ExactSynonym => "Exact Synonym",
            LexicalCategory::OtherSynonym => "Other Synonym",
            LexicalCategory::Formula => "Formula",
            LexicalCategory::InternalSynonym => "Internal Synonym",
        };
        write!(f, "{label}")
    }
}
