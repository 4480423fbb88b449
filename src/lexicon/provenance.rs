//! Provenance records attached to lexical entries.

use serde::{Deserialize, Serialize};

use crate::lexicon::category::LexicalCategory;

/// Round a confidence value to 4 decimal digits.
pub fn round_weight(weight: f64) -> f64 {
    (weight * 10_000.0).round() / 10_000.0
}

/// The record of why, where, and how confidently a name is attached to a
/// class: lexical category, source, language, and weight.
///
/// Immutable once constructed. The weight is rounded to 4 decimal digits
/// on construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provenance {
    category: LexicalCategory,
    source: String,
    language: String,
    weight: f64,
}

impl Provenance {
    /// Create a new provenance record.
    pub fn new<S, L>(category: LexicalCategory, source: S, language: L, weight: f64) -> Self
    where
        S: Into<String>,
        L: Into<String>,
    {
        Provenance {
            category,
            source: source.into(),
            language: language.into(),
            weight: round_weight(weight),
        }
    }

    /// The lexical category of the entry.
    pub fn category(&self) -> LexicalCategory {
        self.category
    }

    /// The source of the entry (knowledge-base URI, external resource
    /// name, etc.). Empty for locally-declared entries.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The language code of the entry.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The confidence weight, in [0, 1], rounded to 4 decimals.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Whether the entry was contributed by an external resource rather
    /// than declared by the primary knowledge base. Locally-declared
    /// entries carry an empty source.
    pub fn is_external(&self) -> bool {
        !self.source.is_empty()
    }
}
